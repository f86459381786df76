use hanoi_view::{HanoiView, PlaybackAction, Speed};

/// Width of the disk count text box.
const DISK_COUNT_INPUT_WIDTH: f32 = 40.0;

pub fn show(ui: &mut egui::Ui, view: &mut HanoiView) {
    ui.horizontal(|ui| {
        ui.label("Disks:");
        let r = ui.add(
            egui::TextEdit::singleline(&mut view.disk_count_input)
                .desired_width(DISK_COUNT_INPUT_WIDTH)
                .hint_text("1-12"),
        );
        let enter_pressed =
            r.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));

        let controls = view.controls();
        let generate_clicked = ui
            .add_enabled(controls.generate, egui::Button::new("Generate"))
            .clicked();
        if generate_clicked || (enter_pressed && controls.generate) {
            if let Err(e) = view.generate() {
                log::warn!("Error generating puzzle: {e}");
            }
        }

        if let Some(error) = view.input_error() {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }
    });

    ui.horizontal(|ui| {
        let controls = view.controls();
        let is_playing = view.sim.as_ref().is_some_and(|sim| sim.is_playing());

        let play_pause_text = if is_playing { "Pause" } else { "Play" };
        let buttons = [
            (PlaybackAction::TogglePlay, play_pause_text),
            (PlaybackAction::StepBackward, "Step back"),
            (PlaybackAction::StepForward, "Step forward"),
            (PlaybackAction::Reset, "Reset"),
        ];
        for (action, text) in buttons {
            if ui
                .add_enabled(controls.allows(action), egui::Button::new(text))
                .clicked()
            {
                view.do_action(action);
            }
        }

        ui.separator();

        let mut multiplier = view.speed().multiplier();
        let r = ui.add(
            egui::Slider::new(
                &mut multiplier,
                Speed::MIN.multiplier()..=Speed::MAX.multiplier(),
            )
            .step_by(Speed::STEP.into())
            .suffix("x")
            .text("Speed"),
        );
        if r.changed() {
            match Speed::from_multiplier(multiplier) {
                Ok(speed) => view.set_speed(speed),
                Err(e) => log::warn!("{e}"),
            }
        }
    });
}

pub fn show_progress(ui: &mut egui::Ui, view: &HanoiView) {
    ui.horizontal(|ui| match &view.sim {
        Some(sim) => {
            ui.label(format!(
                "Moves: {} / {}",
                sim.moves_applied(),
                sim.moves().len(),
            ));
            ui.separator();
            ui.label(sim.move_description());
        }
        None => {
            ui.label("No puzzle");
        }
    });
}
