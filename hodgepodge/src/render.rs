//! Mapping cell states to pixel intensities for a renderer.

use crate::error::RenderError;
use crate::Cell;

/// Colour channel carrying the intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    #[default]
    Blue,
}

/// `floor(value * 255 / states)`, saturating at 255.
pub fn intensity(value: Cell, states: u32) -> u8 {
    let scaled = u64::from(value) * 255 / u64::from(states.max(1));
    scaled.min(255) as u8
}

/// Fills an RGBA frame, one pixel per cell, with the intensity on `channel`.
pub fn render_rgba(cells: &[Cell], states: u32, channel: Channel, frame: &mut [u8]) -> Result<(), RenderError> {
    let expected = cells.len() * 4;
    if frame.len() != expected {
        return Err(RenderError::FrameSize {
            expected,
            actual: frame.len(),
        });
    }
    for (pixel, &value) in frame.chunks_exact_mut(4).zip(cells) {
        let v = intensity(value, states);
        let rgb = match channel {
            Channel::Red => [v, 0, 0],
            Channel::Green => [0, v, 0],
            Channel::Blue => [0, 0, v],
        };
        pixel[..3].copy_from_slice(&rgb);
        pixel[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_linear_in_state() {
        assert_eq!(intensity(0, 100), 0);
        assert_eq!(intensity(50, 100), 127);
        assert_eq!(intensity(99, 100), 252);
        assert_eq!(intensity(100, 100), 255);
        assert_eq!(intensity(1_000, 100), 255);
    }

    #[test]
    fn frame_uses_selected_channel() {
        let mut frame = [9u8; 8];
        render_rgba(&[0, 99], 100, Channel::Blue, &mut frame).unwrap();
        assert_eq!(frame, [0, 0, 0, 255, 0, 0, 252, 255]);

        render_rgba(&[0, 99], 100, Channel::Red, &mut frame).unwrap();
        assert_eq!(frame, [0, 0, 0, 255, 252, 0, 0, 255]);
    }

    #[test]
    fn frame_size_must_match() {
        let mut frame = [0u8; 7];
        assert_eq!(
            render_rgba(&[1, 2], 4, Channel::Green, &mut frame),
            Err(RenderError::FrameSize { expected: 8, actual: 7 })
        );
    }
}
