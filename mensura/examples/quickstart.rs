//! Quick tour: sizing for print and picking readable duration units.
//!
//! Run with: `cargo run --example quickstart`

use mensura::{
    LengthUnit, Millimeters, Pixels, Points, Seconds, TimeUnit, TimeValue,
};

fn main() {
    // A dialog measured on screen, sized for paper.
    let dialog_width = Pixels::new(480.0);
    println!("dialog width: {}", dialog_width);
    println!("  on paper:   {}", dialog_width.to_millimeters());
    println!("  in points:  {}", dialog_width.to_points());

    // Ten-point body text, expressed for a 96 dpi surface.
    let body = Points::new(10.0);
    println!("body text: {} = {}", body, body.to_pixels());

    // Page margins: mixed-unit arithmetic keeps the left operand's unit.
    let margin = Millimeters::new(12.7) + Points::new(36.0);
    println!("total margin: {} ({:?})", margin, margin.unit());

    // Runtime dispatch when the unit is data, not a type.
    let col_width = LengthUnit::convert(64.0, LengthUnit::Pixel, LengthUnit::Millimeter);
    println!("64 px column is {col_width} mm");

    // Durations: a frame budget, displayed in whatever unit reads best.
    let frame = Seconds::new(1.0 / 60.0);
    let shown = TimeValue::from(frame).normalize();
    println!("frame budget: {} = {}", frame, shown);
    assert_eq!(shown.unit(), TimeUnit::Milliseconds);
}
