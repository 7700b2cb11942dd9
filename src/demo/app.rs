// Demo host - renders the route stack and wires the navigation bar
use super::config::Config;
use super::pages::{home_route, page_route, render_page, Page, PageView};
use super::style::{self, Theme};
use eframe::egui;
use navstack::{
    NavController, NavError, NavState, NavigationBar, Navigator, NavigatorOptions, Route, Scene,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use tracing::info;

pub struct DemoApp {
    navigator: Navigator<Page>,
    theme: Theme,
    next_serial: usize,
    changes: Rc<Cell<usize>>,
    info_message: Option<(String, Instant)>,
}

impl DemoApp {
    pub fn new(config: &Config) -> Result<Self, NavError> {
        let mut navigator = Navigator::new(
            NavigatorOptions::default()
                .with_initial_route_stack(vec![home_route()])
                .with_push_policy(config.navigation.push_policy),
        )?;

        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        navigator.subscribe(move |state: &NavState<Page>| {
            counter.set(counter.get() + 1);
            info!(
                presented = %state.presented_route().id,
                len = state.len(),
                "route stack changed"
            );
        });

        Ok(Self {
            navigator,
            theme: Theme::from_mode(&config.theme.mode),
            next_serial: 1,
            changes,
            info_message: None,
        })
    }

    fn take_serial(&mut self) -> usize {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let controller = self.navigator.controller();
        let (back, forward, pop, top, push) = ctx.input(|i| {
            (
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::N),
            )
        });

        if back {
            controller.jump_back();
        }
        if forward {
            controller.jump_forward();
        }
        if pop {
            controller.pop();
        }
        if top {
            controller.pop_to_top();
        }
        if push {
            let serial = self.take_serial();
            controller.push(page_route(serial));
        }
    }

    fn show_stack_panel(&self, ui: &mut egui::Ui, controller: &NavController<Page>) {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.heading("Route stack");
        });
        ui.separator();

        let state = self.navigator.nav_state();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, route) in state.route_stack().iter().enumerate().rev() {
                let is_presented = index == state.presented_index();
                ui.horizontal(|ui| {
                    let label = format!("{:>2}  {}", index, route.payload.title);
                    if ui.selectable_label(is_presented, label).clicked() {
                        controller.jump_to(index);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button("⤓")
                            .on_hover_text("Pop to this route")
                            .clicked()
                        {
                            controller.pop_to_route(route);
                        }
                    });
                });
            }
        });
    }

    fn paint_scenes(&self, ui: &mut egui::Ui, scenes: &[Scene<'_, Page, PageView>]) {
        let area = ui.available_rect_before_wrap().shrink(style::SCENE_MARGIN);
        let painter = ui.painter_at(ui.available_rect_before_wrap());
        let visuals = ui.visuals();
        let top = scenes.len().saturating_sub(1);

        // Painted in z order: later entries end up on top.
        for scene in scenes {
            let depth = (top - scene.z_index) as f32;
            let card = area.translate(egui::vec2(-depth, -depth) * style::CARD_OFFSET);
            let fill = if scene.is_presented {
                visuals.selection.bg_fill
            } else {
                visuals.faint_bg_color
            };
            painter.rect_filled(card, egui::CornerRadius::same(style::CARD_ROUNDING), fill);

            let text_origin = card.left_top() + egui::vec2(16.0, 14.0);
            painter.text(
                text_origin,
                egui::Align2::LEFT_TOP,
                &scene.content.heading,
                egui::FontId::proportional(style::HEADING_SIZE),
                visuals.strong_text_color(),
            );
            painter.text(
                text_origin + egui::vec2(0.0, style::HEADING_SIZE + 8.0),
                egui::Align2::LEFT_TOP,
                &scene.content.detail,
                egui::FontId::proportional(style::BODY_SIZE),
                visuals.text_color(),
            );
        }
    }

    fn clear_expired_message(&mut self) {
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= style::MESSAGE_TIMEOUT_SECS {
                self.info_message = None;
            }
        }
    }
}

/// Top toolbar: the navigation-bar collaborator.
struct Toolbar<'u> {
    ui: &'u mut egui::Ui,
    next_serial: &'u mut usize,
    theme: &'u mut Theme,
}

impl Toolbar<'_> {
    fn take_serial(&mut self) -> usize {
        let serial = *self.next_serial;
        *self.next_serial += 1;
        serial
    }
}

impl NavigationBar<Page> for Toolbar<'_> {
    fn render(&mut self, navigator: &NavController<Page>, nav_state: &NavState<Page>) {
        let ui = &mut *self.ui;
        let mut push = false;
        let mut replace = false;
        let mut replace_previous_and_pop = false;
        let mut reset = false;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(nav_state.can_jump_back(), egui::Button::new("◀ Back"))
                .clicked()
            {
                navigator.jump_back();
            }
            if ui
                .add_enabled(nav_state.can_jump_forward(), egui::Button::new("Forward ▶"))
                .clicked()
            {
                navigator.jump_forward();
            }
            ui.separator();
            if ui.button("Push").clicked() {
                push = true;
            }
            if ui
                .add_enabled(nav_state.can_pop(), egui::Button::new("Pop"))
                .clicked()
            {
                navigator.pop();
            }
            if ui
                .add_enabled(nav_state.can_jump_back(), egui::Button::new("Pop to top"))
                .clicked()
            {
                navigator.pop_to_top();
            }
            ui.separator();
            if ui.button("Replace").clicked() {
                replace = true;
            }
            if ui.button("Replace previous & pop").clicked() {
                replace_previous_and_pop = true;
            }
            if ui.button("Reset").clicked() {
                reset = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match *self.theme {
                    Theme::Dark => "☀",
                    Theme::Light => "🌙",
                };
                if ui.button(label).on_hover_text("Toggle theme").clicked() {
                    *self.theme = self.theme.toggle();
                    ui.ctx().set_visuals(self.theme.visuals());
                }
                style::truncated_label(
                    ui,
                    format!(
                        "{} / {}",
                        nav_state.presented_index() + 1,
                        nav_state.len()
                    ),
                );
            });
        });

        if push {
            let serial = self.take_serial();
            navigator.push(page_route(serial));
        }
        if replace {
            let serial = self.take_serial();
            navigator.replace(page_route(serial));
        }
        if replace_previous_and_pop {
            let serial = self.take_serial();
            navigator.replace_previous_and_pop(page_route(serial));
        }
        if reset {
            navigator.reset_to(home_route());
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.clear_expired_message();

        let controller = self.navigator.controller();

        // --- Top Bar ---
        egui::TopBottomPanel::top("navigation_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            let mut bar = Toolbar {
                ui: &mut *ui,
                next_serial: &mut self.next_serial,
                theme: &mut self.theme,
            };
            self.navigator.render_navigation_bar(&mut bar);
            ui.add_space(4.0);
        });

        // --- Bottom Bar ---
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} routes  ·  {} changes  ·  Alt+←/→ jump  ·  Backspace pop  ·  Home pop to top  ·  N push",
                    self.navigator.get_current_routes().len(),
                    self.changes.get()
                ));
                if let Some((message, _)) = &self.info_message {
                    ui.label(format!(" | {}", message));
                }
            });
        });

        // --- Stack Panel ---
        egui::SidePanel::left("stack_panel")
            .resizable(true)
            .default_width(style::STACK_PANEL_DEFAULT)
            .show(ctx, |ui| self.show_stack_panel(ui, &controller));

        // --- Scenes ---
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut renderer = |route: &Route<Page>| render_page(route);
            let scenes = self.navigator.render_scenes(&mut renderer);
            self.paint_scenes(ui, &scenes);
        });

        // Apply deferred actions
        let effects = self.navigator.drain_effects();
        if !effects.is_empty() {
            let ignored = effects.iter().filter(|e| !e.is_applied()).count();
            if ignored > 0 {
                self.info_message = Some((
                    format!("{} of {} actions had no effect", ignored, effects.len()),
                    Instant::now(),
                ));
            }
            ctx.request_repaint();
        }
    }
}
