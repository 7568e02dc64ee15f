use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use slidepath::*;
use rgb::ComponentBytes;

const DEFAULT_RECORD: &str = "100,100,0,2,0,B|200:100|200:100|300:200|400:100|400:100|500:100";

fn main() {
	env_logger::init();

	let mut args = args().skip(1);
	let png_name = args.next().unwrap_or_else(|| "slider.png".into());
	let record = args.next().unwrap_or_else(|| DEFAULT_RECORD.into());

	let slider = Slider::parse(&record).unwrap();
	slider.log_points();

	let mut canvas = RasterCanvas::new();
	slider.render(&RenderConfig::default(), &mut canvas);
	let (w, h) = (canvas.width(), canvas.height());

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas.pixels().as_bytes()).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
	println!("{}x{} slider saved as {}", w, h, png_name);
}
