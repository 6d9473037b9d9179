//! Seven-segment score glyphs
//!
//! The score is drawn from rectangles instead of rasterized font glyphs, so
//! it goes through the same instanced pipeline as everything else. Each
//! digit is a classic seven-segment layout inside a fixed-size box.

pub const DIGIT_WIDTH: f32 = 45.0;
pub const DIGIT_HEIGHT: f32 = 68.0;

const THICKNESS: f32 = 10.0;

/// Segment order: A top, B top-right, C bottom-right, D bottom,
/// E bottom-left, F top-left, G middle.
const SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],    // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],   // 2
    [true, true, true, true, false, false, true],   // 3
    [false, true, true, false, false, true, true],  // 4
    [true, false, true, true, false, true, true],   // 5
    [true, false, true, true, true, true, true],    // 6
    [true, true, true, false, false, false, false], // 7
    [true, true, true, true, true, true, true],     // 8
    [true, true, true, true, false, true, true],    // 9
];

/// Rectangles for one digit, `(center_x, center_y, width, height)`,
/// positioned from the digit box's top-left corner
pub fn digit_rects(digit: u8, origin_x: f32, origin_y: f32) -> Vec<[f32; 4]> {
    let w = DIGIT_WIDTH;
    let h = DIGIT_HEIGHT;
    let t = THICKNESS;
    let half = h / 2.0;

    // Segment geometry in digit-local coordinates
    let shapes: [[f32; 4]; 7] = [
        [w / 2.0, t / 2.0, w, t],               // A
        [w - t / 2.0, half / 2.0, t, half],     // B
        [w - t / 2.0, h - half / 2.0, t, half], // C
        [w / 2.0, h - t / 2.0, w, t],           // D
        [t / 2.0, h - half / 2.0, t, half],     // E
        [t / 2.0, half / 2.0, t, half],         // F
        [w / 2.0, half, w, t],                  // G
    ];

    let pattern = SEGMENTS[(digit % 10) as usize];
    shapes
        .iter()
        .zip(pattern.iter())
        .filter(|(_shape, on)| **on)
        .map(|(shape, _on)| {
            [
                origin_x + shape[0],
                origin_y + shape[1],
                shape[2],
                shape[3],
            ]
        })
        .collect()
}
