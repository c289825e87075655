// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The external decoder collaborator.

use image::GrayImage;

/// Capability interface for the QR decoder: given a monochrome image, return
/// zero or more decoded payloads. Zero payloads is a per-trial decode
/// failure, never a process failure.
pub trait Decoder {
    fn decode(&self, image: &GrayImage) -> Vec<String>;
}

/// Decoder backed by the `rqrr` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RqrrDecoder;

impl Decoder for RqrrDecoder {
    fn decode(&self, image: &GrayImage) -> Vec<String> {
        let (width, height) = image.dimensions();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            width as usize,
            height as usize,
            |x, y| image.get_pixel(x as u32, y as u32)[0],
        );
        prepared
            .detect_grids()
            .into_iter()
            .filter_map(|grid| grid.decode().ok().map(|(_meta, content)| content))
            .collect()
    }
}
