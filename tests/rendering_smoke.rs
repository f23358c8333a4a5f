use workshop_template::rendering::render_template;
use workshop_template::{PngCodec, TemplateConfig};

#[test]
fn smoke_render_template() {
    let cfg = TemplateConfig { bitmap_font: true, ..Default::default() };
    let s = render_template(&cfg, &PngCodec).expect("render");
    assert_eq!(s.width, 360);
    assert_eq!(s.height, 640);

    let img = image::load_from_memory(&s.png_data).expect("decode");
    assert_eq!(img.color(), image::ColorType::Rgba8);
    assert_eq!((img.width(), img.height()), (360, 640));
}
