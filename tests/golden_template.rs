use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use workshop_template::rendering::render_template;
use workshop_template::{PngCodec, TemplateConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests/goldens/expected");
    p.push(name);
    p
}

// Hashes decoded pixels rather than PNG bytes so the golden does not depend
// on the encoder's compression settings.
#[test]
fn golden_template_matches_digest() {
    let cfg = TemplateConfig { bitmap_font: true, ..Default::default() };
    let screenshot = render_template(&cfg, &PngCodec).expect("render");
    let img = image::load_from_memory(&screenshot.png_data).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (360, 640));
    let digest = hex::encode(Sha256::digest(img.as_raw()));

    let expected_path = golden_path("template_bitmap.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all(expected_path.parent().expect("golden dir")).ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "template pixels changed");
}
