use crate::{state::State, widgets};

pub struct InkleApp {
    state: State,
    repaint_hooked: bool,
}

impl InkleApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            repaint_hooked: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for InkleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.repaint_hooked {
            let repaint_ctx = ctx.clone();
            self.state
                .taxes
                .set_repaint(move || repaint_ctx.request_repaint());
            self.repaint_hooked = true;
        }

        // Apply finished requests before rendering
        self.state.taxes.poll();
        self.state.taxes.mount();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::header(ui);
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            widgets::footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::taxes_page(&mut self.state.taxes, ui);
            });
        });

        widgets::edit_modal(&mut self.state.taxes, ctx);
    }
}
