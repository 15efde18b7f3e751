//! Scene builder for the expenses app mockup.
//!
//! Every function here only *describes* drawing: it measures text through a
//! [`TextMetrics`] implementation and emits paint commands. Nothing touches
//! pixels until the finished display list is handed to the rasterizer, so all
//! geometry is fixed before the first draw.

pub mod data;
pub mod palette;

use crate::rendering::layout::{centered_in, centered_on, fit_to_width, grid_cell, truncate_chars, Rect};
use crate::rendering::paint::{DisplayList, PaintCommand, Rgba};
use crate::rendering::text::{FontSpec, TextMetrics};
use crate::Viewport;

use data::{StatCard, Transaction};
use palette::{dim_white, with_alpha, PRIMARY, WHITE};

pub const SHADOW_OFFSET: i32 = 4;

pub const TITLE_Y: i32 = 40;
pub const TITLE_FONT: FontSpec = FontSpec::bold(32.0);

pub const STAT_CARD_WIDTH: u32 = 160;
pub const STAT_CARD_HEIGHT: u32 = 120;
pub const STAT_CARD_RADIUS: u32 = 20;
pub const STAT_GRID_TOP: i32 = 120;
pub const STAT_GRID_ROW_STEP: i32 = 140;
pub const ICON_BADGE_RADIUS: u32 = 26;
pub const ICON_FONT: FontSpec = FontSpec::bold(24.0);
pub const VALUE_FONT: FontSpec = FontSpec::bold(22.0);
pub const LABEL_FONT: FontSpec = FontSpec::regular(12.0);

pub const SECTION_LABEL_X: i32 = 20;
pub const SECTION_LABEL_Y: i32 = STAT_GRID_TOP + 300;
pub const SECTION_FONT: FontSpec = FontSpec::bold(18.0);

pub const ROW_MARGIN: u32 = 20;
pub const ROW_HEIGHT: u32 = 80;
pub const ROW_RADIUS: u32 = 18;
pub const ROW_TOP: i32 = SECTION_LABEL_Y + 40;
pub const ROW_STEP: i32 = 100;
pub const DATE_BOX_SIZE: u32 = 50;
pub const BADGE_WIDTH: u32 = 90;
pub const BADGE_HEIGHT: u32 = 40;
pub const BADGE_RADIUS: u32 = 12;
/// Horizontal padding kept free inside the category badge
pub const BADGE_PADDING: u32 = 10;
pub const CATEGORY_MAX_CHARS: usize = 12;
pub const DESCRIPTION_MAX_CHARS: usize = 25;
pub const AMOUNT_SLOT_WIDTH: u32 = 100;
pub const DAY_FONT: FontSpec = FontSpec::bold(20.0);
pub const MONTH_FONT: FontSpec = FontSpec::regular(9.0);
pub const CATEGORY_FONT: FontSpec = FontSpec::bold(11.0);
pub const DESCRIPTION_FONT: FontSpec = FontSpec::regular(14.0);
pub const AMOUNT_FONT: FontSpec = FontSpec::bold(16.0);

pub const NAVBAR_HEIGHT: u32 = 70;
pub const NAV_HIGHLIGHT_RADIUS: u32 = 20;
pub const NAV_FONT: FontSpec = FontSpec::regular(28.0);
pub const NAV_INACTIVE: Rgba = dim_white(128);

/// Per-channel linear interpolation, truncated toward zero.
fn lerp(from: Rgba, to: Rgba, t: f64) -> Rgba {
    let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    (ch(from.0, to.0), ch(from.1, to.1), ch(from.2, to.2), 255)
}

/// Background color of scanline `y` on a canvas `height` pixels tall.
pub fn gradient_color_at(y: u32, height: u32) -> Rgba {
    let [top, middle, bottom] = palette::BACKGROUND_STOPS;
    let ratio = y as f64 / height.max(1) as f64;
    if ratio < 0.5 {
        lerp(top, middle, ratio * 2.0)
    } else {
        lerp(middle, bottom, (ratio - 0.5) * 2.0)
    }
}

/// One full-width, one-pixel-high fill per scanline.
pub fn background(viewport: Viewport) -> DisplayList {
    let mut list = DisplayList::new();
    for y in 0..viewport.height {
        list.push(PaintCommand::FillRect {
            rect: Rect::new(0, y as i32, viewport.width, 1),
            rgba: gradient_color_at(y, viewport.height),
        });
    }
    list
}

/// Shadow, then a top-to-bottom translucency ramp, then a hairline border.
pub fn glass_card(card: Rect, radius: u32) -> DisplayList {
    let mut list = DisplayList::new();
    list.push(PaintCommand::FillRoundedRect {
        rect: card.offset(SHADOW_OFFSET, SHADOW_OFFSET),
        radius,
        rgba: palette::SHADOW,
    });
    for i in 0..card.height {
        let alpha = (8.0 + 4.0 * i as f64 / card.height as f64) as u8;
        list.push(PaintCommand::FillRect {
            rect: Rect::new(card.x, card.y + i as i32, card.width, 1),
            rgba: with_alpha(palette::GLASS_FILL, alpha),
        });
    }
    list.push(PaintCommand::StrokeRoundedRect {
        rect: card,
        radius,
        rgba: palette::GLASS_BORDER,
    });
    list
}

fn text_at<M: TextMetrics + ?Sized>(metrics: &mut M, text: &str, font: FontSpec, x: i32, y: i32, rgba: Rgba) -> PaintCommand {
    let extent = metrics.measure(text, font);
    PaintCommand::Text { x, y, text: text.to_string(), font, rgba, extent }
}

/// Text whose measured box is centered on column `center`.
fn text_centered<M: TextMetrics + ?Sized>(metrics: &mut M, text: &str, font: FontSpec, center: i32, y: i32, rgba: Rgba) -> PaintCommand {
    let extent = metrics.measure(text, font);
    PaintCommand::Text {
        x: centered_on(center, extent.width),
        y,
        text: text.to_string(),
        font,
        rgba,
        extent,
    }
}

/// Circle fill plus matching outline, drawn in that order.
fn outlined_circle(list: &mut DisplayList, cx: i32, cy: i32, radius: u32, fill: u8, outline: u8) {
    list.push(PaintCommand::FillCircle { cx, cy, radius, rgba: with_alpha(PRIMARY, fill) });
    list.push(PaintCommand::StrokeCircle { cx, cy, radius, rgba: with_alpha(PRIMARY, outline) });
}

fn outlined_box(list: &mut DisplayList, rect: Rect, fill: u8, outline: u8) {
    list.push(PaintCommand::FillRoundedRect { rect, radius: BADGE_RADIUS, rgba: with_alpha(PRIMARY, fill) });
    list.push(PaintCommand::StrokeRoundedRect { rect, radius: BADGE_RADIUS, rgba: with_alpha(PRIMARY, outline) });
}

pub fn stat_card<M: TextMetrics + ?Sized>(metrics: &mut M, x: i32, y: i32, card: &StatCard<'_>) -> DisplayList {
    let frame = Rect::new(x, y, STAT_CARD_WIDTH, STAT_CARD_HEIGHT);
    let mut list = glass_card(frame, STAT_CARD_RADIUS);

    // Faux glow: concentric hairline rings fading outward-in
    let (icon_x, icon_y) = (frame.center_x(), y + 25);
    let r = ICON_BADGE_RADIUS;
    for i in 0..r {
        let alpha = (30.0 - 10.0 * i as f64 / r as f64) as u8;
        list.push(PaintCommand::StrokeCircle { cx: icon_x, cy: icon_y, radius: r - i, rgba: with_alpha(PRIMARY, alpha) });
    }
    outlined_circle(&mut list, icon_x, icon_y, r, 40, 100);

    list.push(text_centered(metrics, card.icon, ICON_FONT, icon_x, icon_y - 12, PRIMARY));
    list.push(text_centered(metrics, card.value, VALUE_FONT, frame.center_x(), y + 60, WHITE));
    list.push(text_centered(metrics, card.label, LABEL_FONT, frame.center_x(), y + 90, dim_white(165)));
    list
}

/// Hard 12-char cap first, then drop characters until the badge fits.
pub fn fit_category<M: TextMetrics + ?Sized>(metrics: &mut M, category: &str) -> String {
    let capped = truncate_chars(category, CATEGORY_MAX_CHARS);
    fit_to_width(capped, BADGE_WIDTH - BADGE_PADDING, |s| metrics.measure(s, CATEGORY_FONT).width)
}

pub fn fit_description(description: &str) -> &str {
    truncate_chars(description, DESCRIPTION_MAX_CHARS)
}

/// `amount` arrives already formatted with its currency prefix.
pub fn transaction_row<M: TextMetrics + ?Sized>(
    metrics: &mut M,
    viewport: Viewport,
    x: i32,
    y: i32,
    tx: &Transaction<'_>,
    amount: &str,
) -> DisplayList {
    let row = Rect::new(x, y, viewport.width.saturating_sub(2 * ROW_MARGIN), ROW_HEIGHT);
    let mut list = glass_card(row, ROW_RADIUS);

    let date = Rect::new(x + 15, y + 15, DATE_BOX_SIZE, DATE_BOX_SIZE);
    outlined_box(&mut list, date, 30, 50);
    list.push(text_centered(metrics, &tx.day.to_string(), DAY_FONT, date.center_x(), date.y + 8, WHITE));
    list.push(text_centered(metrics, tx.month, MONTH_FONT, date.center_x(), date.y + 32, dim_white(128)));

    let badge = Rect::new(x + 80, y + 20, BADGE_WIDTH, BADGE_HEIGHT);
    outlined_box(&mut list, badge, 40, 50);
    let category = fit_category(metrics, tx.category);
    list.push(text_centered(metrics, &category, CATEGORY_FONT, badge.center_x(), badge.center_y() - 8, dim_white(215)));

    list.push(text_at(metrics, fit_description(tx.description), DESCRIPTION_FONT, x + 185, y + 20, WHITE));

    let slot_x = row.right() - AMOUNT_SLOT_WIDTH as i32;
    let extent = metrics.measure(amount, AMOUNT_FONT);
    list.push(PaintCommand::Text {
        x: centered_in(slot_x, AMOUNT_SLOT_WIDTH, extent.width),
        y: row.center_y() - 10,
        text: amount.to_string(),
        font: AMOUNT_FONT,
        rgba: WHITE,
        extent,
    });
    list
}

/// Bottom tab bar. Slot 0 is always the active tab.
pub fn navbar<M: TextMetrics + ?Sized>(metrics: &mut M, viewport: Viewport, icons: &[&str]) -> DisplayList {
    let mut list = DisplayList::new();
    let top = viewport.height as i32 - NAVBAR_HEIGHT as i32;

    for i in 0..NAVBAR_HEIGHT {
        let alpha = (190.0 + 10.0 * i as f64 / NAVBAR_HEIGHT as f64) as u8;
        list.push(PaintCommand::FillRect {
            rect: Rect::new(0, top + i as i32, viewport.width, 1),
            rgba: with_alpha(palette::BG_DARK, alpha),
        });
    }
    list.push(PaintCommand::FillRect {
        rect: Rect::new(0, top, viewport.width, 1),
        rgba: with_alpha(PRIMARY, 80),
    });

    if icons.is_empty() {
        return list;
    }
    let slot = viewport.width / icons.len() as u32;
    let cy = top + (NAVBAR_HEIGHT / 2) as i32;
    for (i, icon) in icons.iter().enumerate() {
        let cx = (i as u32 * slot + slot / 2) as i32;
        let active = i == 0;
        if active {
            outlined_circle(&mut list, cx, cy, NAV_HIGHLIGHT_RADIUS, 40, 100);
        }
        let extent = metrics.measure(icon, NAV_FONT);
        list.push(PaintCommand::Text {
            x: centered_on(cx, extent.width),
            y: cy - (extent.height / 2) as i32,
            text: icon.to_string(),
            font: NAV_FONT,
            rgba: if active { PRIMARY } else { NAV_INACTIVE },
            extent,
        });
    }
    list
}

/// Full mockup in paint order.
pub fn build_scene<M: TextMetrics + ?Sized>(metrics: &mut M, viewport: Viewport) -> DisplayList {
    let mut scene = background(viewport);
    log::debug!("background: {} scanlines", scene.len());

    scene.push(text_centered(metrics, data::TITLE, TITLE_FONT, (viewport.width / 2) as i32, TITLE_Y, WHITE));

    let column_step = (viewport.width / 2) as i32 - 10;
    for (i, card) in data::STAT_CARDS.iter().enumerate() {
        let (x, y) = grid_cell(i, 2, (ROW_MARGIN as i32, STAT_GRID_TOP), (column_step, STAT_GRID_ROW_STEP));
        scene.append(stat_card(metrics, x, y, card));
    }
    log::debug!("stat cards: {} placed", data::STAT_CARDS.len());

    scene.push(text_at(metrics, data::SECTION_LABEL, SECTION_FONT, SECTION_LABEL_X, SECTION_LABEL_Y, dim_white(180)));

    for (i, tx) in data::TRANSACTIONS.iter().enumerate() {
        let y = ROW_TOP + i as i32 * ROW_STEP;
        scene.append(transaction_row(metrics, viewport, ROW_MARGIN as i32, y, tx, &tx.amount_label()));
    }
    log::debug!("transactions: {} rows", data::TRANSACTIONS.len());

    scene.append(navbar(metrics, viewport, &data::NAV_ICONS));
    log::debug!("scene complete: {} paint commands", scene.len());
    scene
}
