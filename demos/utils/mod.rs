#![allow(dead_code)]

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const MARGIN: usize = 2;

/// Prints `bits` row by row. The barcode already carries its horizontal
/// quiet zones, only blank lines are added above and below.
pub fn display_bits(width: usize, bits: &[bool]) {
    let blank = str::repeat(WHITE, width);

    for _ in 0..MARGIN { println!("{blank}"); }
    for chunk in bits.chunks(width) {
        for &on in chunk { print!("{}", if on { BLACK } else { WHITE }); }
        println!();
    }
    for _ in 0..MARGIN { println!("{blank}"); }
    println!("\x1B[0m");
}

/// Same as [display_bits] for rows packed 8 pixels per byte, each row
/// starting on a new byte.
pub fn display_bitmap(width: usize, bitmap: &[u8]) {
    let blank = str::repeat(WHITE, width);
    let stride = (width - 1) / 8 + 1;

    for _ in 0..MARGIN { println!("{blank}"); }
    for row in bitmap.chunks(stride) {
        for x in 0..width {
            let on = (row[x / 8] >> (7 - x % 8)) & 1 != 0;
            print!("{}", if on { BLACK } else { WHITE });
        }
        println!();
    }
    for _ in 0..MARGIN { println!("{blank}"); }
    println!("\x1B[0m");
}
