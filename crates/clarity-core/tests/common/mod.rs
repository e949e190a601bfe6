#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};

/// Build a row-major buffer by evaluating `f(x, y)` for every pixel.
pub fn generate_pattern(width: u32, height: u32, f: impl Fn(u32, u32) -> i32) -> Vec<i32> {
    let mut buf = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            buf.push(f(x, y));
        }
    }
    buf
}

/// Checkerboard alternating between `even` and `odd` by `(x + y) % 2`.
pub fn checkerboard(width: u32, height: u32, even: i32, odd: i32) -> Vec<i32> {
    generate_pattern(width, height, |x, y| if (x + y) % 2 == 0 { even } else { odd })
}

/// Save an 8-bit grayscale PNG built from `f(x, y)` and return its path.
pub fn write_gray_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> u8,
) -> PathBuf {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)]));
    let path = dir.join(name);
    img.save(&path).expect("write test PNG");
    path
}
