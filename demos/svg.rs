use code39::{encode_with, RenderConfig};

fn main() -> Result<(), code39::Error> {
    let text = std::env::args().nth(1).unwrap_or_else(|| "Paracetamol 500mg".to_owned());
    let config = RenderConfig::new().with_bar_width(2).with_height(50);

    let geometry = encode_with(&text, &config)?;
    println!("{}", geometry.svg());
    Ok(())
}
