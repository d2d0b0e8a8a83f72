// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tessera_core::object::DataBlock;
use tessera_core::preview::{PreviewImage, PreviewOptions, PreviewRenderer, PreviewSize};

/// Default edge length of icon previews, in pixels.
pub const ICON_RESOLUTION: u32 = 32;
/// Default edge length of large previews, in pixels.
pub const LARGE_RESOLUTION: u32 = 128;

/// Renders a deterministic two-color gradient per data-block.
///
/// The colors are derived from a BLAKE3 hash of the block's kind code, name
/// and content, so the same data always yields the same thumbnail and
/// different data-blocks are easy to tell apart in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternPreviewRenderer {
    icon_resolution: u32,
    large_resolution: u32,
}

impl PatternPreviewRenderer {
    /// Creates a renderer with the default resolutions.
    pub fn new() -> Self {
        Self::with_resolutions(ICON_RESOLUTION, LARGE_RESOLUTION)
    }

    /// Creates a renderer with custom resolutions. Zero is clamped to one.
    pub fn with_resolutions(icon_resolution: u32, large_resolution: u32) -> Self {
        Self {
            icon_resolution: icon_resolution.max(1),
            large_resolution: large_resolution.max(1),
        }
    }

    /// Edge length used for a size class.
    pub fn resolution(&self, size: PreviewSize) -> u32 {
        match size {
            PreviewSize::Icon => self.icon_resolution,
            PreviewSize::Large => self.large_resolution,
        }
    }

    fn seed(block: &DataBlock) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(block.kind().code().as_bytes());
        hasher.update(block.name.as_bytes());
        if let Some(data) = block.data() {
            for (key, value) in &data.properties {
                hasher.update(key.as_bytes());
                hasher.update(format!("{value:?}").as_bytes());
            }
        }
        hasher.finalize()
    }
}

impl Default for PatternPreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer for PatternPreviewRenderer {
    fn render_preview(&self, block: &DataBlock, options: &PreviewOptions) -> PreviewImage {
        let edge = self.resolution(options.size);
        let seed = Self::seed(block);
        let bytes = seed.as_bytes();
        let from = [bytes[0], bytes[1], bytes[2]];
        let to = [bytes[3], bytes[4], bytes[5]];

        log::trace!(
            "PatternPreviewRenderer: {edge}x{edge} preview for '{}' (deferred={})",
            block.name,
            options.deferred
        );

        let mut image = PreviewImage::new(edge, edge);
        let span = (2 * (edge - 1)).max(1);
        for y in 0..edge {
            for x in 0..edge {
                let t = (x + y) * 255 / span;
                let mix = |a: u8, b: u8| -> u8 {
                    ((u32::from(a) * (255 - t) + u32::from(b) * t) / 255) as u8
                };
                image.set_pixel(
                    x,
                    y,
                    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2]), 255],
                );
            }
        }
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::object::ObjectKind;

    fn large() -> PreviewOptions {
        PreviewOptions {
            size: PreviewSize::Large,
            deferred: false,
        }
    }

    #[test]
    fn resolution_follows_size_class() {
        let renderer = PatternPreviewRenderer::with_resolutions(16, 64);
        let block = DataBlock::new(ObjectKind::Mesh, "Chair");

        let icon = renderer.render_preview(
            &block,
            &PreviewOptions {
                size: PreviewSize::Icon,
                deferred: false,
            },
        );
        let big = renderer.render_preview(&block, &large());

        assert_eq!((icon.width(), icon.height()), (16, 16));
        assert_eq!((big.width(), big.height()), (64, 64));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = PatternPreviewRenderer::new();
        let a = DataBlock::new(ObjectKind::Mesh, "Chair");
        let b = DataBlock::new(ObjectKind::Mesh, "Chair");
        let c = DataBlock::new(ObjectKind::Mesh, "Table");

        assert_eq!(
            renderer.render_preview(&a, &large()),
            renderer.render_preview(&b, &large())
        );
        assert_ne!(
            renderer.render_preview(&a, &large()),
            renderer.render_preview(&c, &large())
        );
    }

    #[test]
    fn single_pixel_preview() {
        let renderer = PatternPreviewRenderer::with_resolutions(0, 1);
        let block = DataBlock::new(ObjectKind::Image, "Dot");
        let image = renderer.render_preview(&block, &large());

        assert_eq!(image.width(), 1);
        assert_eq!(image.pixel(0, 0).map(|px| px[3]), Some(255));
    }
}
