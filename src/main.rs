mod board;
mod geometry;
mod gravity;
mod history;
mod session;
mod stroke;
mod surface;
mod transform;

use crate::board::Board;
use crate::session::SessionId;
use crate::surface::Surface;
use eframe::egui::{self, Color32, Context, Event, Sense, Stroke, Visuals};
use kurbo::Point;

/// device px radius of the crosshair that previews the warped cursor.
const CURSOR_CROSS_RADIUS: f64 = 3.0;

/// main application state
struct Wellboard {
    /// the device-agnostic drawing core
    board: Board,

    // option values as shown on the sliders, in logical px. pushed into the
    // core every frame, where they get scaled and clamped.
    hole_radius: f64,
    force_radius: f64,
    hide_cursor: bool,

    // egui synthesizes mouse events out of the first touch contact, so
    // while any touch is down the mouse path has to stay quiet
    active_touches: usize,
}

impl Default for Wellboard {
    fn default() -> Self {
        Wellboard {
            board: Board::new(),
            hole_radius: 15.0,
            force_radius: 60.0,
            hide_cursor: false,
            active_touches: 0,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions::default();
    let _ = eframe::run_native(
        "Wellboard",
        native_options,
        Box::new(|cc| Ok(Box::new(Wellboard::new(cc)))),
    );
}

impl Wellboard {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }
}

/// adapts the core's `Surface` onto an egui painter. the core draws in
/// canvas device px; the painter wants logical screen points.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    pixels_per_point: f32,
}

impl PainterSurface<'_> {
    fn to_screen(&self, p: Point) -> egui::Pos2 {
        self.rect.min
            + egui::vec2(
                p.x as f32 / self.pixels_per_point,
                p.y as f32 / self.pixels_per_point,
            )
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, egui::CornerRadius::ZERO, Color32::WHITE);
    }

    fn line_segment(&mut self, a: Point, b: Point) {
        self.painter.line_segment(
            [self.to_screen(a), self.to_screen(b)],
            Stroke::new(1.5, Color32::BLACK),
        );
    }

    fn circle(&mut self, center: Point, radius: f64) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius as f32 / self.pixels_per_point,
            Stroke::new(1.0, Color32::GRAY),
        );
    }
}

impl eframe::App for Wellboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(Visuals {
            window_fill: Color32::WHITE,
            ..egui::Visuals::light()
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_height = ctx.available_rect().height();
            let (response, painter) = ui.allocate_painter(
                egui::Vec2::new(ctx.available_rect().width(), canvas_height),
                Sense::click_and_drag(),
            );

            let pixels_per_point = ctx.pixels_per_point();
            self.board.set_viewport(
                Point::new(response.rect.min.x as f64, response.rect.min.y as f64),
                pixels_per_point as f64,
            );
            self.board
                .apply_options(self.hole_radius, self.force_radius, self.hide_cursor);

            let mut surface = PainterSurface {
                painter: &painter,
                rect: response.rect,
                pixels_per_point,
            };

            // movement events stroke onto the surface right away; the
            // repaint below redraws the same segments, so order is safe
            self.handle_events(ctx, &response, &mut surface);
            self.board.paint(&mut surface);
            self.paint_cursor_preview(ctx, &response, &mut surface);
        });

        self.show_options_window(ctx);
    }
}

impl Wellboard {
    fn handle_events(
        &mut self,
        ctx: &Context,
        response: &egui::Response,
        surface: &mut impl Surface,
    ) {
        for event in &ctx.input(|i| i.events.clone()) {
            match *event {
                // mouse and pen: primary button draws, secondary toggles a
                // gravity point. movement keeps flowing while the button is
                // down even after the cursor leaves the canvas.
                Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if self.active_touches > 0 {
                        continue;
                    }
                    if pressed {
                        if response.hovered() {
                            self.board.pointer_pressed(SessionId::Mouse, raw_point(pos));
                        }
                    } else {
                        self.board.pointer_released(SessionId::Mouse);
                    }
                }
                Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Secondary,
                    pressed: true,
                    ..
                } => {
                    if response.hovered() {
                        self.board.toggle_gravity_at(raw_point(pos));
                    }
                }
                Event::PointerMoved(pos) => {
                    if self.active_touches == 0 {
                        // dropped by the session map unless a press started
                        self.board
                            .pointer_moved(SessionId::Mouse, raw_point(pos), surface);
                    }
                }

                // touch: every contact id is its own concurrent session
                Event::Touch { id, phase, pos, .. } => match phase {
                    egui::TouchPhase::Start => {
                        if response.rect.contains(pos) {
                            self.active_touches += 1;
                            self.board
                                .pointer_pressed(SessionId::Touch(id.0), raw_point(pos));
                        }
                    }
                    egui::TouchPhase::Move => {
                        self.board
                            .pointer_moved(SessionId::Touch(id.0), raw_point(pos), surface);
                    }
                    egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                        self.active_touches = self.active_touches.saturating_sub(1);
                        self.board.pointer_released(SessionId::Touch(id.0));
                    }
                },

                Event::Key {
                    key: egui::Key::Z,
                    pressed: true,
                    ..
                } => {
                    if self.board.can_undo() {
                        self.board.undo();
                    }
                }
                Event::Key {
                    key: egui::Key::Y,
                    pressed: true,
                    ..
                } => {
                    if self.board.can_redo() {
                        self.board.redo();
                    }
                }
                _ => {}
            }
        }
    }

    /// crosshair at the warped cursor position. only the latest hover
    /// position matters here, unlike the drawing path which consumes every
    /// movement sample.
    fn paint_cursor_preview(
        &self,
        ctx: &Context,
        response: &egui::Response,
        surface: &mut impl Surface,
    ) {
        if !response.hovered() {
            return;
        }
        if self.hide_cursor {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            let warped = self.board.warp(raw_point(pos));
            surface.crosshair(warped, CURSOR_CROSS_RADIUS);
        }
    }

    // options window
    fn show_options_window(&mut self, ctx: &Context) {
        egui::Window::new("Options")
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                ui.checkbox(&mut self.hide_cursor, "Hide cursor");

                let hole =
                    egui::Slider::new(&mut self.hole_radius, 0.0..=100.0).text("Hole radius");
                ui.add(hole);

                let force =
                    egui::Slider::new(&mut self.force_radius, 0.0..=200.0).text("Force radius");
                ui.add(force);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.board.can_undo(), egui::Button::new("Undo"))
                        .clicked()
                    {
                        self.board.undo();
                    }
                    if ui
                        .add_enabled(self.board.can_redo(), egui::Button::new("Redo"))
                        .clicked()
                    {
                        self.board.redo();
                    }
                    if ui.button("Clear").clicked() {
                        self.board.clear_all();
                    }
                });
            });
    }
}

fn raw_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}
