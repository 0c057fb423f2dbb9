use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8_core::FrameBuffer;

/// Size multiplier for each machine pixel.
const SCALE: usize = 10;

/// # Display
/// Presents the 64x32 monochrome frame buffer in an SDL2 window, scaled up
/// [`SCALE`] times. The window is only redrawn when the machine reports a
/// fresh frame; the interpreter never reads pixels back.
pub struct Display {
    canvas: WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Opens the window on the given SDL2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "VIP-8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Expands the frame buffer into an RGB24 texture payload: rows are
    /// concatenated, every cell becomes three identical channel bytes, and
    /// the 0/1 cell value maps to 0/255 intensity.
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|cell| std::iter::repeat(cell).take(3))
            .map(|cell| cell * 255)
            .collect()
    }

    /// Uploads the frame as a streaming texture and presents it.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture() {
        let mut frame: FrameBuffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        frame[0][0..2].copy_from_slice(&[1, 0]);
        frame[1][0..2].copy_from_slice(&[0, 1]);
        let texture = Display::frame_to_texture(&frame);

        assert_eq!(texture.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT * 3);
        assert_eq!(texture[0..6], [255, 255, 255, 0, 0, 0]);
        assert_eq!(texture[192..198], [0, 0, 0, 255, 255, 255]);
    }
}
