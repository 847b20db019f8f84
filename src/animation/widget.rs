// src/animation/widget.rs
//
// The leaf drawable of every scene: a box with position, scale and color
// that can be told to glide toward new values one tick at a time.

use nannou::prelude::*;

use super::{advance, Animated};
use crate::{config::AnimationConfig, models::Bounds};

#[derive(Debug, Clone)]
pub struct AnimatedWidget {
    position: Vec2, // bottom-left corner
    size: Vec2,     // unscaled
    scale: Vec2,
    color: Rgba,

    position_target: Option<Vec2>,
    scale_target: Option<Vec2>,
    color_target: Option<Rgba>,

    speeds: AnimationConfig,
}

impl AnimatedWidget {
    pub fn new(position: Vec2, size: Vec2, color: Rgba, speeds: AnimationConfig) -> Self {
        Self {
            position,
            size,
            scale: Vec2::ONE,
            color,
            position_target: None,
            scale_target: None,
            color_target: None,
            speeds,
        }
    }

    /************************** Immediate changes ****************************/

    /// Jumps to `position`, dropping any pending position target.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.position_target = None;
    }

    /// Rigid shift: the pending target moves along with the widget.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        if let Some(target) = self.position_target.as_mut() {
            *target += delta;
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.color_target = None;
    }

    /************************** Interpolation targets *************************/

    pub fn set_interpolate_to_point(&mut self, target: Vec2) {
        self.position_target = Some(target);
    }

    pub fn set_interpolate_to_scale(&mut self, sx: f32, sy: f32) {
        self.scale_target = Some(vec2(sx, sy));
    }

    pub fn set_interpolate_to_color(&mut self, target: Rgba) {
        self.color_target = Some(target);
    }

    /******************************* Queries **********************************/

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn position_target(&self) -> Option<Vec2> {
        self.position_target
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn scaled_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Size once the pending scale target (if any) has been reached.
    pub fn target_size(&self) -> Vec2 {
        self.size * self.scale_target.unwrap_or(self.scale)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_corner_size(self.position, self.scaled_size())
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }
}

impl Animated for AnimatedWidget {
    fn logic(&mut self) {
        advance(
            &mut self.position,
            &mut self.position_target,
            self.speeds.position_speed,
        );
        advance(&mut self.scale, &mut self.scale_target, self.speeds.scale_speed);
        advance(&mut self.color, &mut self.color_target, self.speeds.color_speed);
    }

    fn is_interpolating(&self) -> bool {
        self.position_target.is_some() || self.scale_target.is_some() || self.color_target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> AnimatedWidget {
        AnimatedWidget::new(
            Vec2::ZERO,
            vec2(10.0, 20.0),
            rgba(0.0, 0.0, 0.0, 1.0),
            AnimationConfig {
                position_speed: 5.0,
                scale_speed: 0.25,
                color_speed: 1.0,
            },
        )
    }

    #[test]
    fn test_moves_linearly_until_target() {
        let mut w = widget();
        w.set_interpolate_to_point(vec2(12.0, 0.0));
        assert!(w.is_interpolating());
        w.logic();
        assert_eq!(w.position(), vec2(5.0, 0.0));
        w.logic();
        w.logic();
        assert_eq!(w.position(), vec2(12.0, 0.0));
        assert!(!w.is_interpolating());
    }

    #[test]
    fn test_translate_carries_target() {
        let mut w = widget();
        w.set_interpolate_to_point(vec2(100.0, 0.0));
        w.translate(vec2(0.0, 10.0));
        assert_eq!(w.position(), vec2(0.0, 10.0));
        assert_eq!(w.position_target(), Some(vec2(100.0, 10.0)));
    }

    #[test]
    fn test_set_position_cancels_motion() {
        let mut w = widget();
        w.set_interpolate_to_point(vec2(100.0, 0.0));
        w.set_position(vec2(1.0, 1.0));
        assert!(!w.is_interpolating());
        w.logic();
        assert_eq!(w.position(), vec2(1.0, 1.0));
    }

    #[test]
    fn test_color_fades_per_channel() {
        let mut w = widget();
        w.set_interpolate_to_color(rgba(0.5, 1.0, 0.0, 1.0));
        w.logic();
        assert_eq!(w.color(), rgba(0.5, 1.0, 0.0, 1.0));
        assert!(!w.is_interpolating());

        // set_color wins over a pending fade
        w.set_interpolate_to_color(rgba(0.0, 0.0, 1.0, 1.0));
        w.set_color(rgba(1.0, 1.0, 1.0, 1.0));
        assert!(!w.is_interpolating());
        w.logic();
        assert_eq!(w.color(), rgba(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_scale_affects_bounds() {
        let mut w = widget();
        w.set_interpolate_to_scale(0.5, 0.5);
        assert_eq!(w.target_size(), vec2(5.0, 10.0));
        assert_eq!(w.bounds().w, 10.0);
        while w.is_interpolating() {
            w.logic();
        }
        assert_eq!(w.bounds().w, 5.0);
        assert!(w.contains(vec2(4.0, 9.0)));
        assert!(!w.contains(vec2(6.0, 9.0)));
    }
}
