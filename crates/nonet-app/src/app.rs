//! Nonet desktop application UI.
//!
//! # Design Notes
//! - Board viewer with a 9x9 grid and clear 3x3 boundaries.
//! - Mouse selects free cells only; keyboard fills them (digits, arrows,
//!   delete/backspace/0 to clear).
//! - The win check runs after every successful mutation; once won, board
//!   input is frozen until "Clear answers" resets the session.

use std::sync::Arc;

use eframe::{
    App, CreationContext, Frame,
    egui::{
        Align2, Button, CentralPanel, Color32, Context, FontId, Grid, InputState, Key, RichText,
        Stroke, StrokeKind, Ui, Vec2,
    },
};
use egui_extras::{Size, StripBuilder};
use nonet_core::{Digit, Position};
use nonet_game::{CellState, Game, GameStatus};

#[derive(Debug)]
pub struct NonetApp {
    game: Game,
    selected_cell: Option<Position>,
}

impl NonetApp {
    pub fn new(_cc: &CreationContext<'_>, game: Game) -> Self {
        Self {
            game,
            selected_cell: None,
        }
    }

    fn set_digit(&mut self, digit: Digit) {
        if let Some(pos) = self.selected_cell {
            match self.game.set_digit(pos, digit) {
                Ok(()) => {
                    if self.game.check_win() {
                        log::info!("puzzle completed");
                        self.selected_cell = None;
                    }
                }
                Err(err) => log::debug!("input ignored at {pos:?}: {err}"),
            }
        }
    }

    fn clear_digit(&mut self) {
        if let Some(pos) = self.selected_cell
            && let Err(err) = self.game.clear_cell(pos)
        {
            log::debug!("clear ignored at {pos:?}: {err}");
        }
    }

    fn clear_answers(&mut self) {
        self.game.reset();
        self.selected_cell = None;
    }

    fn handle_input(&mut self, i: &InputState) {
        // Board input is frozen once the puzzle is won; only the
        // "Clear answers" button stays active.
        if self.game.status().is_completed() {
            return;
        }

        const DEFAULT_POSITION: Position = Position::new(0, 0);
        if i.key_pressed(Key::ArrowUp) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.up() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowDown) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.down() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowLeft) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.left() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowRight) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.right() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::Escape) {
            self.selected_cell = None;
        }

        let pairs = [
            (Key::Delete, None),
            (Key::Backspace, None),
            (Key::Num0, None),
            (Key::Num1, Some(Digit::D1)),
            (Key::Num2, Some(Digit::D2)),
            (Key::Num3, Some(Digit::D3)),
            (Key::Num4, Some(Digit::D4)),
            (Key::Num5, Some(Digit::D5)),
            (Key::Num6, Some(Digit::D6)),
            (Key::Num7, Some(Digit::D7)),
            (Key::Num8, Some(Digit::D8)),
            (Key::Num9, Some(Digit::D9)),
        ];
        for (key, digit) in pairs {
            if i.key_pressed(key) {
                if let Some(digit) = digit {
                    self.set_digit(digit);
                } else {
                    self.clear_digit();
                }
            }
        }
    }
}

impl App for NonetApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.input(|i| self.handle_input(i));

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.75))
                .size(Size::relative(0.25))
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        self.draw_grid(ui);
                    });
                    strip.cell(|ui| {
                        self.draw_sidebar(ui);
                    });
                });
        });
    }
}

impl NonetApp {
    fn draw_grid(&mut self, ui: &mut Ui) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let border_color = visuals.widgets.inactive.fg_stroke.color;
        let thick_border = Stroke::new(3.0, border_color);

        let board_size = ui.available_size().min_elem();
        let cell_size = board_size / 9.0;
        let completed = self.game.status().is_completed();

        let outer = Grid::new(ui.id().with("outer_board"))
            .spacing((0.0, 0.0))
            .min_col_width(cell_size * 3.0)
            .min_row_height(cell_size * 3.0)
            .show(ui, |ui| {
                for box_row in 0..3 {
                    for box_col in 0..3 {
                        let box_index = box_row * 3 + box_col;
                        let grid =
                            Grid::new(ui.id().with(format!("inner_box_{box_row}_{box_col}")))
                                .spacing((0.0, 0.0))
                                .min_col_width(cell_size)
                                .min_row_height(cell_size)
                                .show(ui, |ui| {
                                    for cell_row in 0..3 {
                                        for cell_col in 0..3 {
                                            let cell_index = cell_row * 3 + cell_col;
                                            let pos = Position::from_box(box_index, cell_index);
                                            self.draw_cell(ui, pos, cell_size, completed);
                                        }
                                        ui.end_row();
                                    }
                                });
                        ui.painter().rect_stroke(
                            grid.response.rect,
                            0.0,
                            thick_border,
                            StrokeKind::Inside,
                        );
                    }
                    ui.end_row();
                }
            });

        if completed {
            let rect = outer.response.rect;
            let radius = rect.width().min(rect.height()) * 0.28;
            let painter = ui.painter();
            painter.circle_filled(rect.center(), radius, Color32::from_rgb(255, 140, 0));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "You win!",
                FontId::proportional(radius * 0.35),
                Color32::WHITE,
            );
        }
    }

    fn draw_cell(&mut self, ui: &mut Ui, pos: Position, cell_size: f32, completed: bool) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let border_color = visuals.widgets.inactive.fg_stroke.color;
        let given_text_color = visuals.strong_text_color();
        let filled_text_color = visuals.text_color();
        let selected_bg_color = visuals.selection.bg_fill;
        let same_house_bg_color = visuals.widgets.hovered.bg_fill;
        let bg_color = visuals.text_edit_bg_color();

        let thin_border = Stroke::new(1.0, border_color);
        let selected_border = Stroke::new(6.0, border_color);

        let cell = *self.game.cell(pos);
        let text = match cell {
            CellState::Given(digit) => RichText::new(digit.as_str()).color(given_text_color),
            CellState::Filled(digit) => RichText::new(digit.as_str()).color(filled_text_color),
            CellState::Empty => RichText::new(""),
        }
        .size(cell_size * 0.8);

        let mut button = Button::new(text).min_size(Vec2::splat(cell_size));
        if self.selected_cell == Some(pos) {
            button = button.fill(selected_bg_color);
        } else if self.selected_cell.is_some_and(|p| {
            p.x() == pos.x() || p.y() == pos.y() || p.box_index() == pos.box_index()
        }) {
            button = button.fill(same_house_bg_color);
        } else {
            button = button.fill(bg_color);
        }

        let button = ui.add(button);
        let border = if self.selected_cell == Some(pos) {
            selected_border
        } else {
            thin_border
        };
        ui.painter()
            .rect_stroke(button.rect, 0.0, border, StrokeKind::Inside);

        if button.clicked() && !completed {
            if self.selected_cell == Some(pos) {
                // Clicking the selected cell deselects it
                self.selected_cell = None;
            } else if !cell.is_given() {
                self.selected_cell = Some(pos);
            }
        }
    }

    fn draw_sidebar(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let text = match self.game.status() {
                GameStatus::InProgress => "Game in progress",
                GameStatus::Completed => "Congratulations! You solved the puzzle!",
            };
            ui.label(RichText::new(text).size(20.0));
            if ui
                .button(RichText::new("Clear answers").size(20.0))
                .clicked()
            {
                self.clear_answers();
            }
        });
    }
}
