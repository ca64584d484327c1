use code39::*;

mod utils;

const TEXT: &str = "LOT 2024/07";
const BAR_WIDTH: u32 = 2;
const QUIET_ZONE: u32 = 6;
const HEIGHT: u32 = 8;

const W: usize = code39_width!(TEXT.len(), BAR_WIDTH, QUIET_ZONE);
const H: usize = HEIGHT as usize;

fn main() {
    let mut storage = [0u8; ((W - 1) / 8 + 1) * H];
    Code39::new(TEXT).render()
        .set_bar_width(BAR_WIDTH)
        .set_quiet_zone(QUIET_ZONE)
        .set_height(HEIGHT)
        .set_inverted(std::env::args().any(|arg| arg == "--inverted"))
        .fill_bitmap(&mut storage[..]);

    utils::display_bitmap(W, &storage);
}
