use image::{GrayImage, Luma};
use thermo_lines::EdgeMap;

pub const GROUP_SIZE: usize = 10;
pub const LINE_SPACING: i32 = 4;
pub const LINE_LENGTH: i32 = 41;

/// 200x200 map with two groups of `GROUP_SIZE` horizontal lines centred on
/// y = 50 and y = 150, and two groups of vertical lines centred on x = 50 and
/// x = 150. Horizontal lines span x = 90..=130 and vertical lines span
/// y = 90..=130, so the families never touch.
pub fn orthogonal_families() -> EdgeMap {
    let mut map = EdgeMap::zeros(200, 200);
    let half = LINE_SPACING * (GROUP_SIZE as i32 - 1) / 2;
    for centre in [50, 150] {
        for i in 0..GROUP_SIZE as i32 {
            let offset = centre - half + LINE_SPACING * i;
            map.draw_line([90, offset], [90 + LINE_LENGTH - 1, offset]);
            map.draw_line([offset, 90], [offset, 90 + LINE_LENGTH - 1]);
        }
    }
    map
}

/// Gray image of a bright axis-aligned rectangle on a dark background.
pub fn bright_rectangle(
    width: u32,
    height: u32,
    top_left: (u32, u32),
    size: (u32, u32),
) -> GrayImage {
    assert!(top_left.0 + size.0 <= width && top_left.1 + size.1 <= height);
    GrayImage::from_fn(width, height, |x, y| {
        let inside = (top_left.0..top_left.0 + size.0).contains(&x)
            && (top_left.1..top_left.1 + size.1).contains(&y);
        Luma([if inside { 220 } else { 30 }])
    })
}
