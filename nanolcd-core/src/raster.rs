//! Geometric primitives
//!
//! Everything here reduces to [`set_window`] plus a pixel stream. Single
//! windows (point, filled rectangle, bitmap) are rejected whole when they
//! leave the panel. Composite shapes (line, outline, circle) are built from
//! points and skip the ones that fall off the panel, so a shape that only
//! partly overlaps still shows its visible part.

use nanolcd_hal::LcdBus;

use crate::color::Rgb565;
use crate::error::DrawError;
use crate::window::{cmd, set_window, Orientation, PixelStream, Window};

/// Primitive drawing over an [`LcdBus`]
pub struct Rasterizer<B: LcdBus> {
    bus: B,
    orientation: Orientation,
}

impl<B: LcdBus> Rasterizer<B> {
    /// Wrap a bus
    ///
    /// Nothing is sent; call [`apply_orientation`](Self::apply_orientation)
    /// once the controller is out of reset.
    pub fn new(bus: B, orientation: Orientation) -> Self {
        Self { bus, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switch orientation and reprogram the scan direction
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DrawError<B::Error>> {
        self.orientation = orientation;
        self.apply_orientation()
    }

    /// Send the MADCTL byte for the current orientation
    pub fn apply_orientation(&mut self) -> Result<(), DrawError<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("orientation {} (madctl {:#x})", self.orientation, self.orientation.madctl());

        self.bus.wait_idle().map_err(DrawError::Bus)?;
        self.bus.write_command(cmd::MADCTL).map_err(DrawError::Bus)?;
        self.bus
            .write_data8(self.orientation.madctl())
            .map_err(DrawError::Bus)
    }

    /// Logical width for the current orientation
    pub fn width(&self) -> u16 {
        self.orientation.width()
    }

    /// Logical height for the current orientation
    pub fn height(&self) -> u16 {
        self.orientation.height()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Open a raw write window
    pub fn window(&mut self, window: Window) -> Result<PixelStream<'_, B>, DrawError<B::Error>> {
        set_window(&mut self.bus, self.orientation, window)
    }

    /// Set one pixel
    pub fn point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        let mut stream = self.window(Window::point(x, y))?;
        stream.write(color)?;
        stream.finish()
    }

    /// Fill the inclusive rectangle `(x1, y1)..=(x2, y2)`
    pub fn fill_rect(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        let window = Window::new(x1, y1, x2, y2);
        let mut stream = self.window(window)?;
        stream.fill(color, window.pixel_count())?;
        stream.finish()
    }

    /// Fill the whole panel
    pub fn clear(&mut self, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        self.fill_rect(0, 0, self.width() - 1, self.height() - 1, color)
    }

    /// 3x3 block centred on `(x, y)`
    pub fn big_point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        let (Some(x1), Some(y1)) = (x.checked_sub(1), y.checked_sub(1)) else {
            return Err(DrawError::OutOfBounds);
        };
        self.fill_rect(x1, y1, x.saturating_add(1), y.saturating_add(1), color)
    }

    /// Stream a caller-owned image into a `width` x `height` window
    ///
    /// `pixels` is row-major and must hold exactly `width * height` entries.
    pub fn blit(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[Rgb565],
    ) -> Result<(), DrawError<B::Error>> {
        if pixels.len() != width as usize * height as usize {
            return Err(DrawError::LengthMismatch);
        }
        let window = Window::from_origin(x, y, width, height).ok_or(DrawError::OutOfBounds)?;
        let mut stream = self.window(window)?;
        stream.write_all(pixels.iter().copied())?;
        stream.finish()
    }

    /// Straight line from `(x1, y1)` to `(x2, y2)`, both ends included
    ///
    /// Integer DDA: the longer axis advances every step, the shorter one
    /// whenever its accumulator crosses the step count. Accumulators start
    /// half-full so the error is centred on the ideal line.
    pub fn line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        let (dx, dy) = (i32::from(x2) - i32::from(x1), i32::from(y2) - i32::from(y1));
        let (step_x, step_y) = (dx.signum(), dy.signum());
        let (dx, dy) = (dx.abs(), dy.abs());
        let distance = dx.max(dy);

        let (mut x, mut y) = (i32::from(x1), i32::from(y1));
        let (mut err_x, mut err_y) = (distance / 2, distance / 2);

        self.plot(x, y, color)?;
        for _ in 0..distance {
            err_x += dx;
            if err_x >= distance {
                err_x -= distance;
                x += step_x;
            }
            err_y += dy;
            if err_y >= distance {
                err_y -= distance;
                y += step_y;
            }
            self.plot(x, y, color)?;
        }
        Ok(())
    }

    /// Outline of the rectangle with corners `(x1, y1)` and `(x2, y2)`
    pub fn rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        self.line(x1, y1, x2, y1, color)?;
        self.line(x1, y1, x1, y2, color)?;
        self.line(x1, y2, x2, y2, color)?;
        self.line(x2, y1, x2, y2, color)
    }

    /// Circle outline of radius `r` around `(x0, y0)`
    pub fn circle(&mut self, x0: u16, y0: u16, r: u16, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        let (x0, y0, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        let (mut a, mut b) = (0, r);

        while a <= b {
            for (px, py) in [
                (x0 + b, y0 - a),
                (x0 - b, y0 - a),
                (x0 + b, y0 + a),
                (x0 - b, y0 + a),
                (x0 + a, y0 - b),
                (x0 - a, y0 - b),
                (x0 + a, y0 + b),
                (x0 - a, y0 + b),
            ] {
                self.plot(px, py, color)?;
            }
            a += 1;
            if i64::from(a) * i64::from(a) + i64::from(b) * i64::from(b) > i64::from(r) * i64::from(r) {
                b -= 1;
            }
        }
        Ok(())
    }

    /// Point that may fall off the panel; off-panel points are skipped
    fn plot(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        if x < 0 || y < 0 || x >= i32::from(self.width()) || y >= i32::from(self.height()) {
            return Ok(());
        }
        self.point(x as u16, y as u16, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, FailingBus, RecordingBus};
    use proptest::prelude::*;
    use std::collections::HashSet;

    const OFFSETS: (u16, u16) = (1, 26);

    fn landscape() -> Rasterizer<RecordingBus> {
        Rasterizer::new(RecordingBus::new(), Orientation::Landscape)
    }

    fn line_points(x1: u16, y1: u16, x2: u16, y2: u16) -> Vec<(u16, u16)> {
        let mut raster = landscape();
        raster.line(x1, y1, x2, y2, Rgb565::WHITE).unwrap();
        raster.bus().points(OFFSETS)
    }

    fn circle_points(x0: u16, y0: u16, r: u16) -> HashSet<(i32, i32)> {
        let mut raster = landscape();
        raster.circle(x0, y0, r, Rgb565::WHITE).unwrap();
        raster
            .bus()
            .points(OFFSETS)
            .into_iter()
            .map(|(x, y)| (i32::from(x), i32::from(y)))
            .collect()
    }

    #[test]
    fn test_fill_rect_single_window() {
        let mut raster = landscape();
        raster.fill_rect(10, 10, 19, 19, Rgb565(0xF800)).unwrap();

        let draws = raster.bus().draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].columns, (11, 20));
        assert_eq!(draws[0].rows, (36, 45));
        assert_eq!(draws[0].pixels, vec![0xF800; 100]);
    }

    #[test]
    fn test_point_out_of_bounds_is_noop() {
        let mut raster = landscape();
        assert_eq!(raster.point(160, 0, Rgb565::RED), Err(DrawError::OutOfBounds));
        assert_eq!(raster.point(0, 80, Rgb565::RED), Err(DrawError::OutOfBounds));
        assert!(raster.bus().events().is_empty());

        raster.point(159, 79, Rgb565::RED).unwrap();
        assert_eq!(raster.bus().points(OFFSETS), [(159, 79)]);
    }

    #[test]
    fn test_clear_covers_panel() {
        let mut raster = landscape();
        raster.clear(Rgb565::BLUE).unwrap();
        let draws = raster.bus().draws();
        assert_eq!(draws[0].columns, (1, 160));
        assert_eq!(draws[0].rows, (26, 105));
        assert_eq!(draws[0].pixels.len(), 160 * 80);
    }

    #[test]
    fn test_big_point() {
        let mut raster = landscape();
        raster.big_point(5, 5, Rgb565::GREEN).unwrap();
        let draws = raster.bus().draws();
        assert_eq!(draws[0].columns, (5, 7));
        assert_eq!(draws[0].pixels.len(), 9);

        assert_eq!(raster.big_point(0, 5, Rgb565::GREEN), Err(DrawError::OutOfBounds));
        assert_eq!(raster.big_point(159, 5, Rgb565::GREEN), Err(DrawError::OutOfBounds));
    }

    #[test]
    fn test_blit_checks_length_and_bounds() {
        let mut raster = landscape();
        let image = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];

        assert_eq!(raster.blit(0, 0, 3, 1, &image), Err(DrawError::LengthMismatch));
        assert_eq!(raster.blit(159, 0, 2, 2, &image), Err(DrawError::OutOfBounds));
        assert!(raster.bus().events().is_empty());

        raster.blit(2, 3, 2, 2, &image).unwrap();
        let draws = raster.bus().draws();
        assert_eq!(draws[0].columns, (3, 4));
        assert_eq!(draws[0].rows, (29, 30));
        assert_eq!(draws[0].pixels, [0xF800, 0x07E0, 0x001F, 0xFFFF]);
    }

    #[test]
    fn test_set_orientation_sends_madctl() {
        let mut raster = landscape();
        raster.set_orientation(Orientation::Portrait).unwrap();
        assert_eq!(raster.bus().events(), &[Event::Command(0x36), Event::Data(0x08)]);
        assert_eq!((raster.width(), raster.height()), (80, 160));

        // Former landscape coordinate is now off-panel
        assert_eq!(raster.point(100, 0, Rgb565::RED), Err(DrawError::OutOfBounds));
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let points = line_points(5, 7, 12, 7);
        assert_eq!(points, (5..=12).map(|x| (x, 7)).collect::<Vec<_>>());

        let points = line_points(3, 40, 3, 30);
        assert_eq!(points, (30..=40).rev().map(|y| (3, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_diagonal_line() {
        let points = line_points(0, 0, 4, 4);
        assert_eq!(points, [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_degenerate_line_is_a_point() {
        assert_eq!(line_points(9, 9, 9, 9), [(9, 9)]);
    }

    #[test]
    fn test_rectangle_outline() {
        let mut raster = landscape();
        raster.rectangle(2, 2, 5, 4, Rgb565::WHITE).unwrap();
        let points: HashSet<_> = raster.bus().points(OFFSETS).into_iter().collect();

        let mut expected = HashSet::new();
        for x in 2..=5 {
            expected.insert((x, 2));
            expected.insert((x, 4));
        }
        for y in 2..=4 {
            expected.insert((2, y));
            expected.insert((5, y));
        }
        assert_eq!(points, expected);
    }

    #[test]
    fn test_circle_radius_zero() {
        let points = circle_points(20, 20, 0);
        assert_eq!(points, HashSet::from([(20, 20)]));
    }

    #[test]
    fn test_circle_cardinal_points() {
        let points = circle_points(80, 40, 10);
        for p in [(90, 40), (70, 40), (80, 30), (80, 50)] {
            assert!(points.contains(&p), "missing {:?}", p);
        }
        assert!(!points.contains(&(80, 40)));
    }

    #[test]
    fn test_circle_at_corner_draws_visible_arc() {
        let points = circle_points(0, 0, 5);
        assert!(points.contains(&(5, 0)));
        assert!(points.contains(&(0, 5)));
        assert!(points.iter().all(|&(x, y)| x >= 0 && y >= 0));
    }

    #[test]
    fn test_circle_huge_radius_is_silent() {
        let mut raster = landscape();
        raster.circle(80, 40, 50_000, Rgb565::WHITE).unwrap();
        raster.circle(0, 0, u16::MAX, Rgb565::WHITE).unwrap();
        assert!(raster.bus().events().is_empty());
    }

    #[test]
    fn test_bus_errors_propagate() {
        let mut raster = Rasterizer::new(FailingBus, Orientation::Landscape);
        assert_eq!(raster.fill_rect(0, 0, 1, 1, Rgb565::RED), Err(DrawError::Bus(())));
        assert_eq!(raster.line(0, 0, 5, 5, Rgb565::RED), Err(DrawError::Bus(())));
        assert_eq!(raster.circle(20, 20, 3, Rgb565::RED), Err(DrawError::Bus(())));
        // Rejection wins over the broken bus
        assert_eq!(raster.point(500, 0, Rgb565::RED), Err(DrawError::OutOfBounds));
    }

    proptest! {
        #[test]
        fn prop_line_plots_both_endpoints(
            x1 in 0u16..160, y1 in 0u16..80, x2 in 0u16..160, y2 in 0u16..80,
        ) {
            let points = line_points(x1, y1, x2, y2);
            prop_assert_eq!(points.first(), Some(&(x1, y1)));
            prop_assert_eq!(points.last(), Some(&(x2, y2)));
            prop_assert_eq!(points.len(), x1.abs_diff(x2).max(y1.abs_diff(y2)) as usize + 1);
        }

        #[test]
        fn prop_line_is_connected(
            x1 in 0u16..160, y1 in 0u16..80, x2 in 0u16..160, y2 in 0u16..80,
        ) {
            let points = line_points(x1, y1, x2, y2);
            for pair in points.windows(2) {
                prop_assert!(pair[0].0.abs_diff(pair[1].0) <= 1);
                prop_assert!(pair[0].1.abs_diff(pair[1].1) <= 1);
            }
        }

        #[test]
        fn prop_axis_lines_plot_each_coordinate_once(
            a in 0u16..160, b in 0u16..160, fixed in 0u16..80,
        ) {
            let points = line_points(a, fixed, b, fixed);
            let xs: HashSet<_> = points.iter().map(|p| p.0).collect();
            prop_assert_eq!(xs.len(), points.len());
            prop_assert_eq!(xs, (a.min(b)..=a.max(b)).collect::<HashSet<_>>());

            let (a, b) = (a % 80, b % 80);
            let points = line_points(fixed, a, fixed, b);
            let ys: HashSet<_> = points.iter().map(|p| p.1).collect();
            prop_assert_eq!(ys.len(), points.len());
            prop_assert_eq!(ys, (a.min(b)..=a.max(b)).collect::<HashSet<_>>());
        }

        #[test]
        fn prop_circle_is_eightfold_symmetric(r in 0u16..40) {
            let (x0, y0) = (80, 40);
            let points = circle_points(x0 as u16, y0 as u16, r);
            for &(x, y) in &points {
                let (dx, dy) = (x - x0, y - y0);
                for reflected in [
                    (x0 - dx, y0 + dy),
                    (x0 + dx, y0 - dy),
                    (x0 - dx, y0 - dy),
                    (x0 + dy, y0 + dx),
                    (x0 - dy, y0 + dx),
                    (x0 + dy, y0 - dx),
                    (x0 - dy, y0 - dx),
                ] {
                    prop_assert!(points.contains(&reflected), "{:?} lacks {:?}", (x, y), reflected);
                }
            }
        }
    }
}
