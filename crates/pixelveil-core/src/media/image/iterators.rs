use image::buffer::{Pixels, PixelsMut, Rows, RowsMut};
use image::Pixel;
use std::iter::Take;
use std::slice::{Iter, IterMut};

/// Number of color channels that carry message bits per pixel. Channels
/// beyond these, like alpha, are never touched.
pub(crate) const EMBED_CHANNELS: usize = 3;

/// Allows transposed mutable access to pixels, column by column:
/// (0,0), (0,1), ..., (0,h-1), (1,0), ...
pub(crate) struct ColumnMajorPixelsMut<'a, P: Pixel + 'a> {
    i: usize,
    i_max: usize,
    height: usize,
    rows_mut: RowsMut<'a, P>,
    rows_buffer: Vec<PixelsMut<'a, P>>,
}

impl<'a, P: Pixel + 'a> ColumnMajorPixelsMut<'a, P> {
    /// utilises RowsMut to give column based mut access to pixels
    pub fn from_rows_mut(rows_mut: RowsMut<'a, P>, width: u32) -> Self {
        let height = rows_mut.len();

        Self {
            i: 0,
            i_max: height * width as usize,
            height,
            rows_mut,
            rows_buffer: Vec::with_capacity(height),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColumnMajorPixelsMut<'a, P> {
    type Item = &'a mut P;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let row_idx = self.i % self.height;
        self.i += 1;
        match self.rows_buffer.get_mut(row_idx) {
            None => match self.rows_mut.next() {
                Some(mut row) => {
                    let p = row.next();
                    self.rows_buffer.push(row);
                    p
                }
                _ => None,
            },
            Some(row) => row.next(),
        }
    }
}

pub(crate) struct ColumnMajorPixels<'a, P: Pixel + 'a> {
    i: usize,
    i_max: usize,
    height: usize,
    rows: Rows<'a, P>,
    rows_buffer: Vec<Pixels<'a, P>>,
}

impl<'a, P: Pixel + 'a> ColumnMajorPixels<'a, P> {
    /// utilises Rows to give column based readonly access to pixels
    pub fn from_rows(rows: Rows<'a, P>, width: u32) -> Self {
        let height = rows.len();

        Self {
            i: 0,
            i_max: height * width as usize,
            height,
            rows,
            rows_buffer: Vec::with_capacity(height),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColumnMajorPixels<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let row_idx = self.i % self.height;
        self.i += 1;
        match self.rows_buffer.get_mut(row_idx) {
            None => match self.rows.next() {
                Some(mut row) => {
                    let p = row.next();
                    self.rows_buffer.push(row);
                    p
                }
                _ => None,
            },
            Some(row) => row.next(),
        }
    }
}

/// Fans a column major pixel walk out into the first 3 channels of every
/// pixel, mutably.
pub(crate) struct RgbChannelsMut<'a, P: Pixel + 'a> {
    pixels: ColumnMajorPixelsMut<'a, P>,
    channels: Option<Take<IterMut<'a, P::Subpixel>>>,
}

impl<'a, P: Pixel + 'a> RgbChannelsMut<'a, P> {
    pub fn from_pixels(pixels: ColumnMajorPixelsMut<'a, P>) -> Self {
        Self {
            pixels,
            channels: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for RgbChannelsMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(channel) = self.channels.as_mut().and_then(Iterator::next) {
                return Some(channel);
            }
            match self.pixels.next() {
                Some(pixel) => {
                    self.channels = Some(pixel.channels_mut().iter_mut().take(EMBED_CHANNELS))
                }
                None => return None,
            }
        }
    }
}

pub(crate) struct RgbChannels<'a, P: Pixel + 'a> {
    pixels: ColumnMajorPixels<'a, P>,
    channels: Option<Take<Iter<'a, P::Subpixel>>>,
}

impl<'a, P: Pixel + 'a> RgbChannels<'a, P> {
    pub fn from_pixels(pixels: ColumnMajorPixels<'a, P>) -> Self {
        Self {
            pixels,
            channels: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for RgbChannels<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(channel) = self.channels.as_mut().and_then(Iterator::next) {
                return Some(channel);
            }
            match self.pixels.next() {
                Some(pixel) => self.channels = Some(pixel.channels().iter().take(EMBED_CHANNELS)),
                None => return None,
            }
        }
    }
}
