use egui::{Color32, Pos2, Rect, Vec2, lerp, pos2, vec2};
use hanoi_core::prelude::*;
use hanoi_view::{AnimPhase, HanoiSimulation, MoveAnimation};

const MARGIN: f32 = 20.0;
const BASE_HEIGHT: f32 = 10.0;
const PEG_WIDTH: f32 = 8.0;
const MAX_DISK_HEIGHT: f32 = 28.0;
const CORNER_RADIUS: f32 = 3.0;
/// Width of the smallest disk relative to the largest.
const MIN_DISK_WIDTH_RATIO: f32 = 0.25;

/// Positions of the pegs and disks within the board.
#[derive(Debug, Copy, Clone)]
struct Layout {
    rect: Rect,
    disk_count: u8,
    disk_height: f32,
}
impl Layout {
    fn new(rect: Rect, disk_count: DiskCount) -> Self {
        let rect = rect.shrink(MARGIN);
        let disk_count = disk_count.get();
        // Room for every disk, plus the peg tip and a lifted disk above it.
        let disk_height = (rect.height() - BASE_HEIGHT) / (f32::from(disk_count) + 3.0);
        Self {
            rect,
            disk_count,
            disk_height: disk_height.clamp(1.0, MAX_DISK_HEIGHT),
        }
    }

    fn base_rect(&self) -> Rect {
        Rect::from_min_max(
            pos2(self.rect.left(), self.base_top()),
            self.rect.right_bottom(),
        )
    }
    fn base_top(&self) -> f32 {
        self.rect.bottom() - BASE_HEIGHT
    }

    fn peg_x(&self, peg: Peg) -> f32 {
        self.rect.left() + self.rect.width() * (peg.index() as f32 + 0.5) / 3.0
    }
    fn peg_rect(&self, peg: Peg) -> Rect {
        let x = self.peg_x(peg);
        Rect::from_min_max(
            pos2(x - PEG_WIDTH / 2.0, self.peg_top()),
            pos2(x + PEG_WIDTH / 2.0, self.base_top()),
        )
    }
    fn peg_top(&self) -> f32 {
        self.base_top() - self.disk_height * (f32::from(self.disk_count) + 1.0)
    }

    /// Returns the center of a disk at height `slot` on `peg`, where slot 0
    /// rests on the base.
    fn slot_center(&self, peg: Peg, slot: usize) -> Pos2 {
        pos2(
            self.peg_x(peg),
            self.base_top() - self.disk_height * (slot as f32 + 0.5),
        )
    }
    /// Returns the height of the center of a disk that is lifted clear of
    /// the pegs.
    fn lift_y(&self) -> f32 {
        self.peg_top() - self.disk_height
    }

    fn disk_size(&self, disk: Disk) -> Vec2 {
        let max_width = self.rect.width() / 3.0 * 0.9;
        let min_width = max_width * MIN_DISK_WIDTH_RATIO;
        let t = match self.disk_count {
            1 => 1.0,
            n => f32::from(disk.0 - 1) / f32::from(n - 1),
        };
        vec2(lerp(min_width..=max_width, t), self.disk_height * 0.9)
    }

    /// Returns the center of the disk being animated.
    fn animated_disk_center(&self, tower: &Tower, anim: &MoveAnimation, t: f32) -> Pos2 {
        let mv = anim.visual_move();
        // The disk has not yet left the source peg in the logical state.
        let start = self.slot_center(mv.from, tower.peg(mv.from).len().saturating_sub(1));
        let end = self.slot_center(mv.to, tower.peg(mv.to).len());
        let lift_y = self.lift_y();
        match anim.phase() {
            AnimPhase::Lift => pos2(start.x, lerp(start.y..=lift_y, t)),
            AnimPhase::Move => pos2(lerp(start.x..=end.x, t), lift_y),
            AnimPhase::Drop => pos2(end.x, lerp(lift_y..=end.y, t)),
        }
    }
}

pub fn show(ui: &mut egui::Ui, sim: &HanoiSimulation) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let layout = Layout::new(response.rect, sim.disk_count());

    let visuals = ui.visuals();
    let peg_color = visuals.weak_text_color();
    let highlight_color = visuals.selection.bg_fill;

    let anim = sim.animation_t();
    let visual_move = anim.map(|(anim, _)| anim.visual_move());

    painter.rect_filled(layout.base_rect(), CORNER_RADIUS, peg_color);

    for (peg, disks) in sim.tower().pegs() {
        let is_highlighted = visual_move.is_some_and(|mv| mv.from == peg || mv.to == peg);
        let color = if is_highlighted {
            highlight_color
        } else {
            peg_color
        };
        painter.rect_filled(layout.peg_rect(peg), CORNER_RADIUS, color);

        // The animated disk is drawn separately.
        let hidden = match visual_move {
            Some(mv) if mv.from == peg => 1,
            _ => 0,
        };
        let visible = &disks[..disks.len().saturating_sub(hidden)];
        for (slot, &disk) in visible.iter().enumerate() {
            paint_disk(&painter, &layout, disk, layout.slot_center(peg, slot));
        }
    }

    if let Some((anim, t)) = anim {
        let center = layout.animated_disk_center(sim.tower(), anim, t);
        paint_disk(&painter, &layout, anim.visual_move().disk, center);
    }
}

fn paint_disk(painter: &egui::Painter, layout: &Layout, disk: Disk, center: Pos2) {
    let rect = Rect::from_center_size(center, layout.disk_size(disk));
    painter.rect_filled(rect, CORNER_RADIUS, disk_color(disk, layout.disk_count));
}

fn disk_color(disk: Disk, disk_count: u8) -> Color32 {
    let c = colorous::RAINBOW.eval_rational(usize::from(disk.0 - 1), usize::from(disk_count));
    Color32::from_rgb(c.r, c.g, c.b)
}
