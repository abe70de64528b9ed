// SPDX-License-Identifier: MPL-2.0
//! Tab icon drawn on a Canvas and driven by a player's playback progress.
//!
//! Progress 0.0 is the resting pose (first frame); 1.0 is the fully
//! "activated" pose reached when the selected tab finishes playing.

use crate::tabs::Glyph;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::f32::consts::PI;

/// One animated glyph at a given point of its timeline.
pub struct AnimatedIcon {
    cache: Cache,
    glyph: Glyph,
    progress: f32,
    color: Color,
    size: f32,
}

impl AnimatedIcon {
    /// Creates an icon in its resting pose.
    #[must_use]
    pub fn new(glyph: Glyph, color: Color, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            glyph,
            progress: 0.0,
            color,
            size,
        }
    }

    /// Sets the playback progress, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.cache.clear();
        self
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Creates a Canvas widget from this icon.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn stroke(&self, scale: f32) -> Stroke<'static> {
        Stroke::default()
            .with_width(sizing::GLYPH_STROKE * scale)
            .with_color(self.color)
            .with_line_cap(LineCap::Round)
    }

    /// House outline; the door fills in as the icon activates.
    fn draw_home(&self, frame: &mut Frame, scale: f32) {
        let s = frame.width();
        let lift = 2.0 * scale * ease(self.progress);

        let outline = Path::new(|b| {
            b.move_to(Point::new(s * 0.15, s * 0.45));
            b.line_to(Point::new(s * 0.5, s * 0.15 - lift));
            b.line_to(Point::new(s * 0.85, s * 0.45));
            b.move_to(Point::new(s * 0.25, s * 0.4));
            b.line_to(Point::new(s * 0.25, s * 0.85));
            b.line_to(Point::new(s * 0.75, s * 0.85));
            b.line_to(Point::new(s * 0.75, s * 0.4));
        });
        frame.stroke(&outline, self.stroke(scale));

        let door_height = s * 0.25 * self.progress;
        if door_height > 0.0 {
            let door = Path::rectangle(
                Point::new(s * 0.42, s * 0.85 - door_height),
                Size::new(s * 0.16, door_height),
            );
            frame.fill(&door, self.color);
        }
    }

    /// Three bars that grow to staggered heights.
    fn draw_positions(&self, frame: &mut Frame, scale: f32) {
        let s = frame.width();
        let base = s * 0.85;
        let targets = [0.3, 0.55, 0.4];
        let rest = 0.2;

        for (i, target) in targets.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            // i∈[0,2] - exact in f32
            let x = s * (0.25 + 0.25 * i as f32);
            let height = s * (rest + (target - rest) * ease(self.progress));
            let bar = Path::line(Point::new(x, base), Point::new(x, base - height));
            frame.stroke(&bar, self.stroke(scale * 1.5));
        }
    }

    /// Five-pointed star that turns a fifth of a revolution.
    fn draw_points(&self, frame: &mut Frame, scale: f32) {
        let center = frame.center();
        let outer = frame.width() * 0.38;
        let inner = outer * 0.45;
        let rotation = ease(self.progress) * (2.0 * PI / 5.0);

        let star = Path::new(|b| {
            for i in 0..10 {
                #[allow(clippy::cast_precision_loss)]
                // i∈[0,9] - exact in f32
                let angle = rotation - PI / 2.0 + i as f32 * PI / 5.0;
                let r = if i % 2 == 0 { outer } else { inner };
                let point = center + Vector::new(r * angle.cos(), r * angle.sin());
                if i == 0 {
                    b.move_to(point);
                } else {
                    b.line_to(point);
                }
            }
            b.close();
        });

        if self.progress >= 1.0 {
            frame.fill(&star, self.color);
        } else {
            frame.stroke(&star, self.stroke(scale));
        }
    }

    /// Head and shoulders; the head nods down and back up.
    fn draw_account(&self, frame: &mut Frame, scale: f32) {
        let s = frame.width();
        let nod = (self.progress * PI).sin() * 2.0 * scale;

        let head = Path::circle(Point::new(s * 0.5, s * 0.35 + nod), s * 0.15);
        frame.stroke(&head, self.stroke(scale));

        let shoulders = Path::new(|b| {
            b.arc(canvas::path::Arc {
                center: Point::new(s * 0.5, s * 0.9),
                radius: s * 0.3,
                start_angle: iced::Radians(PI),
                end_angle: iced::Radians(2.0 * PI),
            });
        });
        frame.stroke(&shoulders, self.stroke(scale));
    }
}

/// Ease-out cubic.
fn ease(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

impl<Message> canvas::Program<Message> for AnimatedIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let scale = frame.width().min(frame.height()) / crate::config::DEFAULT_ICON_SIZE;
                match self.glyph {
                    Glyph::Home => self.draw_home(frame, scale),
                    Glyph::Positions => self.draw_positions(frame, scale),
                    Glyph::Points => self.draw_points(frame, scale),
                    Glyph::Account => self.draw_account(frame, scale),
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn progress_is_clamped() {
        let icon = AnimatedIcon::new(Glyph::Home, Color::BLACK, 28.0);
        assert_abs_diff_eq!(icon.progress(), 0.0);

        let icon = AnimatedIcon::new(Glyph::Home, Color::BLACK, 28.0).with_progress(1.7);
        assert_abs_diff_eq!(icon.progress(), 1.0);

        let icon = AnimatedIcon::new(Glyph::Home, Color::BLACK, 28.0).with_progress(-0.5);
        assert_abs_diff_eq!(icon.progress(), 0.0);

        let icon = AnimatedIcon::new(Glyph::Home, Color::BLACK, 28.0).with_progress(f32::NAN);
        assert_abs_diff_eq!(icon.progress(), 0.0);
    }

    #[test]
    fn ease_hits_endpoints() {
        assert_abs_diff_eq!(ease(0.0), 0.0);
        assert_abs_diff_eq!(ease(1.0), 1.0);
        assert!(ease(0.5) > 0.5);
    }
}
