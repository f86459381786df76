use hanoi_core::DiskCount;
use hanoi_prefs::Preferences;
use hanoi_view::{HanoiView, PlaybackAction};

mod board;
mod controls;

pub struct AppUi {
    pub view: HanoiView,
}

impl AppUi {
    pub(crate) fn new(
        cc: &eframe::CreationContext<'_>,
        prefs: &Preferences,
        disk_count: DiskCount,
    ) -> Self {
        // Override UI style.
        cc.egui_ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        });

        let mut view = HanoiView::new(prefs);
        view.disk_count_input = disk_count.to_string();
        view.load_puzzle(disk_count);

        AppUi { view }
    }

    pub fn build(&mut self, ctx: &egui::Context) {
        // Keyboard shortcuts are ignored while typing in the disk count.
        if !ctx.wants_keyboard_input() {
            for action in ctx.input(keyboard_actions) {
                self.view.do_action(action);
            }
        }

        egui::TopBottomPanel::top("controls")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(8.0))
            .show(ctx, |ui| controls::show(ui, &mut self.view));

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            controls::show_progress(ui, &self.view);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.view.sim {
            Some(sim) => board::show(ui, sim),
            None => {
                ui.centered_and_justified(|ui| ui.label("Choose a number of disks"));
            }
        });

        if self.view.step() {
            ctx.request_repaint();
        }
    }
}

fn keyboard_actions(input: &egui::InputState) -> Vec<PlaybackAction> {
    [
        (egui::Key::Space, PlaybackAction::TogglePlay),
        (egui::Key::ArrowLeft, PlaybackAction::StepBackward),
        (egui::Key::ArrowRight, PlaybackAction::StepForward),
    ]
    .into_iter()
    .filter(|&(key, _)| input.key_pressed(key))
    .map(|(_, action)| action)
    .collect()
}
