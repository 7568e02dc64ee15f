use std::env::args;
use std::fs::File;
use std::io::Write;
use slidepath::*;

const DEFAULT_RECORD: &str = "100,100,0,2,0,B|200:100|200:100|300:200|400:100|400:100|500:100";

fn main() {
	env_logger::init();

	let mut args = args().skip(1);
	let svg_name = args.next().unwrap_or_else(|| "slider_path.svg".into());
	let record = args.next().unwrap_or_else(|| DEFAULT_RECORD.into());
	let show_path = args.next().as_deref() == Some("--show-path");

	let slider = match Slider::parse(&record) {
		Ok(slider) => slider,
		Err(e) => {
			eprintln!("cannot parse {:?}: {}", record, e);
			std::process::exit(1);
		}
	};
	slider.log_points();

	let config = RenderConfig {
		show_diagnostic_overlay: show_path,
		..RenderConfig::default()
	};

	let mut file = File::create(&svg_name).unwrap();
	let mut canvas = SvgCanvas::new();
	slider.render_and_save(&config, &mut canvas, |bytes| file.write_all(bytes)).unwrap();
	println!("SVG saved as {}", svg_name);
}
