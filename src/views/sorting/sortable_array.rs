// src/views/sorting/sortable_array.rs
//
// The SortableArray is a row of columns over a fixed row of slots.
//
// Slots are the screen positions of array indices and never change
// except when the whole array is moved. Swapping only changes which
// column sits in which slot; columns then glide to their new slot.

use nannou::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{ArrayError, ArrayStyle, Column, ColumnId};
use crate::{
    animation::{Animated, AnimatedWidget},
    controllers::{PointerId, Touchable},
    draw::{draw_marker, draw_outline},
    models::Bounds,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Iteration,
    Step,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    column: ColumnId,
    pointer: PointerId,
}

pub struct SortableArray {
    columns: Vec<Column>,
    slot_positions: Vec<Vec2>,
    original_values: Vec<u32>,
    bounds: Bounds,
    element_width: f32,
    spacing_width: f32,
    max_value: u32,
    seed: Option<u64>,

    // solve-stepper scaffolding
    iteration_marker: AnimatedWidget,
    step_marker: AnimatedWidget,
    iteration_index: usize,
    step_index: usize,
    draw_iteration_marker: bool,
    draw_step_marker: bool,

    drag: Option<Drag>,
    style: ArrayStyle,
}

impl SortableArray {
    /// Random values in `[1, max_value]`; the same seed always gives the same array.
    pub fn new(
        origin: Vec2,
        element_width: f32,
        num_elements: usize,
        max_value: u32,
        seed: u64,
        style: ArrayStyle,
    ) -> Result<Self, ArrayError> {
        if num_elements == 0 {
            return Err(ArrayError::Empty);
        }
        if max_value == 0 {
            return Err(ArrayError::ZeroMaxValue);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let values = (0..num_elements)
            .map(|_| rng.gen_range(1..=max_value))
            .collect();

        Ok(Self::build(
            origin,
            element_width,
            values,
            max_value,
            Some(seed),
            style,
        ))
    }

    pub fn from_values(
        origin: Vec2,
        element_width: f32,
        values: &[u32],
        style: ArrayStyle,
    ) -> Result<Self, ArrayError> {
        let max_value = values.iter().copied().max().ok_or(ArrayError::Empty)?;
        if max_value == 0 {
            return Err(ArrayError::ZeroMaxValue);
        }
        Ok(Self::build(
            origin,
            element_width,
            values.to_vec(),
            max_value,
            None,
            style,
        ))
    }

    fn build(
        origin: Vec2,
        element_width: f32,
        values: Vec<u32>,
        max_value: u32,
        seed: Option<u64>,
        style: ArrayStyle,
    ) -> Self {
        let spacing_width = element_width;
        let stride = element_width + spacing_width;
        let total_width = values.len() as f32 * stride;

        let slot_positions: Vec<Vec2> = (0..values.len())
            .map(|idx| origin + vec2(idx as f32 * stride, 0.0))
            .collect();
        let columns = values
            .iter()
            .zip(&slot_positions)
            .enumerate()
            .map(|(idx, (value, slot))| {
                Column::new(ColumnId(idx), *value, max_value, *slot, element_width, &style)
            })
            .collect();

        let marker_size = vec2(element_width, element_width * 0.6);
        let iteration_marker = AnimatedWidget::new(
            origin,
            marker_size,
            style.iteration_marker_color,
            style.speeds,
        );
        let step_marker =
            AnimatedWidget::new(origin, marker_size, style.step_marker_color, style.speeds);

        let mut array = Self {
            columns,
            slot_positions,
            original_values: values,
            bounds: Bounds::new(origin.x, origin.y, total_width, super::MAX_HEIGHT),
            element_width,
            spacing_width,
            max_value,
            seed,
            iteration_marker,
            step_marker,
            iteration_index: 0,
            step_index: 0,
            draw_iteration_marker: false,
            draw_step_marker: false,
            drag: None,
            style,
        };
        array.set_marker_to_position(Marker::Iteration, 0);
        array.set_marker_to_position(Marker::Step, 0);
        array
    }

    /// Same values in their original order, on the same slots.
    pub fn fresh_copy(&self) -> Self {
        let mut copy = Self::build(
            vec2(self.bounds.x, self.bounds.y),
            self.element_width,
            self.original_values.clone(),
            self.max_value,
            self.seed,
            self.style.clone(),
        );
        copy.draw_iteration_marker = self.draw_iteration_marker;
        copy.draw_step_marker = self.draw_step_marker;
        copy
    }

    /****************************** Queries **********************************/

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn values(&self) -> Vec<u32> {
        self.columns.iter().map(Column::value).collect()
    }

    pub fn slot_positions(&self) -> &[Vec2] {
        &self.slot_positions
    }

    pub fn position(&self) -> Vec2 {
        vec2(self.bounds.x, self.bounds.y)
    }

    pub fn total_width(&self) -> f32 {
        self.columns.len() as f32 * (self.element_width + self.spacing_width)
    }

    pub fn index_of(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id() == id)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn dragged(&self) -> Option<ColumnId> {
        self.drag.map(|d| d.column)
    }

    /****************************** Placement ********************************/

    pub fn set_position(&mut self, x: f32, y: f32) {
        let delta = vec2(x, y) - self.position();
        self.translate(delta.x, delta.y);
        self.set_marker_to_position(Marker::Iteration, self.iteration_index);
        self.set_marker_to_position(Marker::Step, self.step_index);
    }

    /// Rigid shift of columns, slots and markers.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let delta = vec2(dx, dy);
        self.bounds.translate(delta);
        for column in self.columns.iter_mut() {
            column.translate(delta);
        }
        for slot in self.slot_positions.iter_mut() {
            *slot += delta;
        }
        self.iteration_marker.translate(delta);
        self.step_marker.translate(delta);
    }

    pub fn center_on_point(&mut self, x: f32, y: f32) {
        self.set_position(x - self.total_width() * 0.5, y);
    }

    /****************************** Swapping *********************************/

    /// Swaps `dragged` with the first column, in array order, that it overlaps.
    pub fn attempt_swap(&mut self, dragged: ColumnId) -> Option<ColumnId> {
        let dragged_idx = self.index_of(dragged)?;
        let dragged_column = &self.columns[dragged_idx];

        let target_idx = self
            .columns
            .iter()
            .enumerate()
            .find(|(idx, other)| *idx != dragged_idx && dragged_column.colliding_with(other))
            .map(|(idx, _)| idx)?;

        let displaced = self.columns[target_idx].id();
        self.force_swap(dragged_idx, target_idx);
        Some(displaced)
    }

    /// Exchanges the columns at two indices. Their widgets stay where they
    /// are until sent to their new slots.
    pub fn force_swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.columns.len() || b >= self.columns.len() {
            return false;
        }
        self.columns.swap(a, b);
        true
    }

    /// Swaps two indices and sends both columns gliding to their new slots.
    pub fn swap_indices(&mut self, a: usize, b: usize) -> bool {
        if a == b || !self.force_swap(a, b) {
            return false;
        }
        self.set_lerp_to_position(b, self.style.moved_color);
        self.set_lerp_to_position(a, self.style.displaced_color);
        info!(a, b, values = ?self.values(), "swapped indices");
        true
    }

    /// Sends the column at `idx` gliding to its slot, recolored.
    fn set_lerp_to_position(&mut self, idx: usize, color: Rgba) {
        let (Some(slot), Some(column)) = (self.slot_positions.get(idx), self.columns.get_mut(idx))
        else {
            return;
        };
        column.set_interpolate_point(*slot);
        column.set_override_color(color);
    }

    /****************************** Markers **********************************/

    fn marker_mut(&mut self, marker: Marker) -> &mut AnimatedWidget {
        match marker {
            Marker::Iteration => &mut self.iteration_marker,
            Marker::Step => &mut self.step_marker,
        }
    }

    pub fn marker(&self, marker: Marker) -> &AnimatedWidget {
        match marker {
            Marker::Iteration => &self.iteration_marker,
            Marker::Step => &self.step_marker,
        }
    }

    fn marker_point(&self, marker: Marker, idx: usize) -> Option<Vec2> {
        let slot = self.slot_positions.get(idx)?;
        let height = self.marker(marker).scaled_size().y;
        Some(vec2(slot.x, slot.y - height * 1.5))
    }

    /// Out-of-range indices are ignored.
    pub fn set_marker_to_position(&mut self, marker: Marker, idx: usize) {
        match self.marker_point(marker, idx) {
            Some(point) => self.marker_mut(marker).set_position(point),
            None => trace!(?marker, idx, "marker index out of range"),
        }
    }

    pub fn set_marker_lerp_to_position(&mut self, marker: Marker, idx: usize) {
        match self.marker_point(marker, idx) {
            Some(point) => self.marker_mut(marker).set_interpolate_to_point(point),
            None => trace!(?marker, idx, "marker index out of range"),
        }
    }

    pub fn show_markers(&mut self, show: bool) {
        self.draw_iteration_marker = show;
        self.draw_step_marker = show;
    }

    pub fn markers_visible(&self) -> bool {
        self.draw_iteration_marker || self.draw_step_marker
    }

    pub fn iteration_index(&self) -> usize {
        self.iteration_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /****************************** Solve stepping ***************************/

    pub fn next_solve_step(&mut self) {
        if self.step_index_complete() {
            self.increment_iteration();
        }
        if self.solve_completed() {
            return;
        }
        // TODO: move step_index within the iteration once a sorting algorithm drives it
    }

    fn increment_iteration(&mut self) {
        self.iteration_index += 1;
        self.step_index = self.iteration_index;
        debug!(iteration = self.iteration_index, "next iteration");

        self.set_marker_lerp_to_position(Marker::Iteration, self.iteration_index);
        self.set_marker_lerp_to_position(Marker::Step, self.iteration_index);
    }

    fn solve_completed(&self) -> bool {
        false
    }

    fn step_index_complete(&self) -> bool {
        false
    }

    /****************************** Frame hooks ******************************/

    pub fn logic(&mut self) {
        for column in self.columns.iter_mut() {
            column.logic();
        }
        self.iteration_marker.logic();
        self.step_marker.logic();
    }

    /// Resting columns first so moving ones pass in front of them.
    pub fn draw(&self, draw: &Draw) {
        let dragged = self.dragged();
        let (moving, resting): (Vec<&Column>, Vec<&Column>) = self
            .columns
            .iter()
            .filter(|c| Some(c.id()) != dragged)
            .partition(|c| c.is_interpolating());

        for column in resting.into_iter().chain(moving) {
            column.draw(draw);
        }
        if let Some(column) = dragged.and_then(|id| self.column(id)) {
            column.draw(draw);
            draw_outline(draw, column.bounds(), self.style.moved_color, 2.0);
        }

        if self.draw_step_marker {
            draw_marker(draw, &self.step_marker);
        }
        if self.draw_iteration_marker {
            draw_marker(draw, &self.iteration_marker);
        }
    }
}

impl Touchable for SortableArray {
    fn touch_down(&mut self, point: Point2, pointer: PointerId, button: MouseButton) -> bool {
        if button != MouseButton::Left || self.drag.is_some() {
            return false;
        }

        let Some(column) = self.columns.iter_mut().find(|c| c.contains(point)) else {
            return false;
        };
        column.started_dragging(point);
        self.drag = Some(Drag {
            column: column.id(),
            pointer,
        });
        true
    }

    fn touch_dragged(&mut self, point: Point2, pointer: PointerId) -> bool {
        let Some(drag) = self.drag.filter(|d| d.pointer == pointer) else {
            return false;
        };
        match self.columns.iter_mut().find(|c| c.id() == drag.column) {
            Some(column) => {
                column.dragged_to_point(point);
                true
            }
            None => false,
        }
    }

    fn touch_up(&mut self, point: Point2, pointer: PointerId, _button: MouseButton) -> bool {
        let Some(drag) = self.drag.filter(|d| d.pointer == pointer) else {
            return false;
        };
        self.drag = None;

        let Some(idx) = self.index_of(drag.column) else {
            return false;
        };
        self.columns[idx].ended_dragging(point);

        let swapped_with = self.attempt_swap(drag.column);

        if let Some(idx) = self.index_of(drag.column) {
            self.set_lerp_to_position(idx, self.style.moved_color);
        }
        if let Some(other) = swapped_with {
            if let Some(idx) = self.index_of(other) {
                self.set_lerp_to_position(idx, self.style.displaced_color);
            }
            info!(values = ?self.values(), "swapped columns");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;

    fn style() -> ArrayStyle {
        ArrayStyle {
            speeds: AnimationConfig {
                position_speed: 10_000.0,
                scale_speed: 10.0,
                color_speed: 10.0,
            },
            ..ArrayStyle::default()
        }
    }

    // slots at x = 0, 40, 80; heights 187.5, 75, 300
    fn five_two_eight() -> SortableArray {
        SortableArray::from_values(Vec2::ZERO, 20.0, &[5, 2, 8], style()).unwrap()
    }

    fn settle(array: &mut SortableArray) {
        for _ in 0..4 {
            array.logic();
        }
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            SortableArray::from_values(Vec2::ZERO, 20.0, &[], style()).err(),
            Some(ArrayError::Empty)
        );
        assert_eq!(
            SortableArray::new(Vec2::ZERO, 20.0, 0, 10, 1, style()).err(),
            Some(ArrayError::Empty)
        );
        assert_eq!(
            SortableArray::new(Vec2::ZERO, 20.0, 3, 0, 1, style()).err(),
            Some(ArrayError::ZeroMaxValue)
        );
    }

    #[test]
    fn test_default_config_builds() {
        let config = crate::config::Config::default();
        let array = SortableArray::new(
            Vec2::ZERO,
            config.array.element_width,
            config.array.elements,
            config.array.max_value,
            config.array.seed,
            ArrayStyle::from_config(&config),
        )
        .unwrap();
        assert_eq!(array.len(), config.array.elements);
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let a = SortableArray::new(Vec2::ZERO, 20.0, 12, 9, 99, style()).unwrap();
        let b = SortableArray::new(Vec2::ZERO, 20.0, 12, 9, 99, style()).unwrap();
        assert_eq!(a.values(), b.values());
        assert!(a.values().iter().all(|v| (1..=9).contains(v)));
        assert_eq!(a.slot_positions().len(), 12);
    }

    #[test]
    fn test_slots_follow_layout() {
        let array = five_two_eight();
        assert_eq!(
            array.slot_positions(),
            &[vec2(0.0, 0.0), vec2(40.0, 0.0), vec2(80.0, 0.0)]
        );
    }

    #[test]
    fn test_drag_first_onto_last_swaps() {
        let mut array = five_two_eight();
        let slots = array.slot_positions().to_vec();

        assert!(array.touch_down(pt2(10.0, 5.0), 0, MouseButton::Left));
        assert!(array.touch_dragged(pt2(50.0, 5.0), 0));
        assert!(array.touch_up(pt2(90.0, 5.0), 0, MouseButton::Left));
        assert_eq!(array.values(), vec![8, 2, 5]);
        assert_eq!(array.dragged(), None);

        settle(&mut array);
        assert_eq!(array.columns()[0].position(), slots[0]);
        assert_eq!(array.columns()[2].position(), slots[2]);
        assert_eq!(array.slot_positions(), &slots[..]);
    }

    #[test]
    fn test_drop_onto_neighbour_swaps() {
        let mut array = five_two_eight();
        // lands on slot 1 only
        array.touch_down(pt2(0.0, 0.0), 0, MouseButton::Left);
        array.touch_up(pt2(50.0, 0.0), 0, MouseButton::Left);
        assert_eq!(array.values(), vec![2, 5, 8]);
    }

    #[test]
    fn test_first_overlap_wins() {
        let slow = ArrayStyle {
            speeds: AnimationConfig {
                position_speed: 10.0,
                scale_speed: 10.0,
                color_speed: 10.0,
            },
            ..ArrayStyle::default()
        };
        // slots at x = 0, 40, 80, 120
        let mut array =
            SortableArray::from_values(Vec2::ZERO, 20.0, &[5, 3, 2, 8], slow).unwrap();
        assert!(array.swap_indices(1, 2));
        array.logic();
        array.logic();
        // both gliding columns now sit on top of each other at x = 60
        assert_eq!(array.columns()[1].position(), vec2(60.0, 0.0));
        assert_eq!(array.columns()[2].position(), vec2(60.0, 0.0));

        let two = array.columns()[1].id();
        assert!(array.touch_down(pt2(125.0, 10.0), 0, MouseButton::Left));
        array.touch_dragged(pt2(65.0, 10.0), 0);
        assert!(array.touch_up(pt2(65.0, 10.0), 0, MouseButton::Left));

        // array order decides, not the size of the overlap
        assert_eq!(array.values(), vec![5, 8, 3, 2]);
        assert_eq!(array.index_of(two), Some(3));
    }

    #[test]
    fn test_release_in_empty_space_returns_home() {
        let mut array = five_two_eight();
        array.touch_down(pt2(45.0, 10.0), 0, MouseButton::Left);
        array.touch_up(pt2(45.0, 600.0), 0, MouseButton::Left);
        assert_eq!(array.values(), vec![5, 2, 8]);
        settle(&mut array);
        assert_eq!(array.columns()[1].position(), vec2(40.0, 0.0));
    }

    #[test]
    fn test_no_repick_while_dragging() {
        let mut array = five_two_eight();
        assert!(array.touch_down(pt2(5.0, 5.0), 0, MouseButton::Left));
        let first = array.dragged();
        assert!(!array.touch_down(pt2(85.0, 5.0), 7, MouseButton::Left));
        assert_eq!(array.dragged(), first);

        // other pointers cannot move or drop it
        assert!(!array.touch_dragged(pt2(300.0, 300.0), 7));
        assert!(!array.touch_up(pt2(300.0, 300.0), 7, MouseButton::Left));
        assert_eq!(array.dragged(), first);
    }

    #[test]
    fn test_only_left_button_grabs() {
        let mut array = five_two_eight();
        assert!(!array.touch_down(pt2(5.0, 5.0), 0, MouseButton::Right));
        assert!(!array.touch_down(pt2(30.0, 5.0), 0, MouseButton::Left));
        assert_eq!(array.dragged(), None);
    }

    #[test]
    fn test_force_swap_bounds() {
        let mut array = five_two_eight();
        assert!(!array.force_swap(0, 3));
        assert!(array.force_swap(0, 1));
        assert_eq!(array.values(), vec![2, 5, 8]);
        // positions untouched until sent to their slots
        assert_eq!(array.columns()[0].position(), vec2(40.0, 0.0));
    }

    #[test]
    fn test_swap_indices_relocates_both() {
        let mut array = five_two_eight();
        assert!(!array.swap_indices(1, 1));
        assert!(!array.swap_indices(0, 9));
        assert!(array.swap_indices(0, 2));
        assert_eq!(array.values(), vec![8, 2, 5]);
        settle(&mut array);
        assert_eq!(array.columns()[0].position(), vec2(0.0, 0.0));
        assert_eq!(array.columns()[2].position(), vec2(80.0, 0.0));
        assert_eq!(array.columns()[2].widget().color(), array.style.moved_color);
    }

    #[test]
    fn test_translate_moves_everything() {
        let mut array = five_two_eight();
        array.translate(10.0, -5.0);
        assert_eq!(array.slot_positions()[2], vec2(90.0, -5.0));
        assert_eq!(array.columns()[2].position(), vec2(90.0, -5.0));
        array.set_position(0.0, 0.0);
        assert_eq!(array.slot_positions()[0], Vec2::ZERO);
    }

    #[test]
    fn test_center_on_point() {
        let mut array = five_two_eight();
        array.center_on_point(0.0, 0.0);
        assert_eq!(array.position(), vec2(-60.0, 0.0));
        assert_eq!(array.slot_positions()[0], vec2(-60.0, 0.0));
    }

    #[test]
    fn test_fresh_copy_restores_order() {
        let mut array = SortableArray::new(vec2(-100.0, 0.0), 20.0, 6, 50, 3, style()).unwrap();
        let original = array.values();
        array.force_swap(0, 5);
        let copy = array.fresh_copy();
        assert_eq!(copy.values(), original);
        assert_eq!(copy.slot_positions(), array.slot_positions());
    }

    #[test]
    fn test_markers_skip_out_of_range() {
        let mut array = five_two_eight();
        let before = array.marker(Marker::Step).position();
        array.set_marker_to_position(Marker::Step, 3);
        assert_eq!(array.marker(Marker::Step).position(), before);
        array.set_marker_to_position(Marker::Step, 2);
        assert_eq!(array.marker(Marker::Step).position().x, 80.0);
        assert!(array.marker(Marker::Step).position().y < 0.0);
    }

    #[test]
    fn test_solve_step_is_scaffolding() {
        let mut array = five_two_eight();
        array.next_solve_step();
        assert_eq!(array.iteration_index(), 0);
        assert_eq!(array.step_index(), 0);
        assert_eq!(array.values(), vec![5, 2, 8]);
    }
}
