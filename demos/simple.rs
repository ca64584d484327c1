use code39::*;

mod utils;

const TEXT: &str = "Hello-39";
const BAR_WIDTH: u32 = 1;
const QUIET_ZONE: u32 = 4;
const HEIGHT: u32 = 6;

const W: usize = code39_width!(TEXT.len(), BAR_WIDTH, QUIET_ZONE);
const H: usize = HEIGHT as usize;

fn main() {
    let barcode = Code39::new(TEXT);
    println!("{} -> *{}*", barcode.value(), barcode.payload());

    let mut storage = [false; W * H];
    barcode.render()
        .set_bar_width(BAR_WIDTH)
        .set_quiet_zone(QUIET_ZONE)
        .set_height(HEIGHT)
        .fill_bits(&mut storage[..]);

    utils::display_bits(W, &storage);
}
