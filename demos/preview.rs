use code39::{Color, GeneratorConfig, Generator};

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

const PADDING: usize = 4;

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| "CODE-39".to_string());

    let config = GeneratorConfig::new()
        .with_height(8)
        .with_narrow_width(1)
        .with_ratio(2.5);
    let mut generator = Generator::with_config(config);
    if let Err(err) = generator.encode(&text) {
        eprintln!("{err}");
        std::process::exit(err.code());
    }

    let bitmap = generator.bitmap();
    let quiet_zone_v = str::repeat(WHITE, bitmap.width() + PADDING * 2);
    let quiet_zone_h = str::repeat(WHITE, PADDING);

    println!("{quiet_zone_v}");
    for (x, _, color) in bitmap.pixels() {
        if x == 0 {
            print!("{quiet_zone_h}");
        }
        print!("{}", if color == Color::Black { BLACK } else { WHITE });
        if x + 1 == bitmap.width() {
            println!("{quiet_zone_h}");
        }
    }
    println!("{quiet_zone_v}\x1B[0m");
}
