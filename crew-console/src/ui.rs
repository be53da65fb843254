//! Rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use crate::app::{App, FormField, LoginField, Overlay, Screen};
use crate::theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    match app.screen {
        Screen::Login => render_login(frame, app, &theme),
        Screen::Dashboard => render_dashboard(frame, app, &theme),
        Screen::Employees => render_employees(frame, app, &theme),
    }

    match &app.overlay {
        Some(Overlay::Form) => render_form(frame, app, &theme),
        Some(Overlay::ConfirmDelete(_)) => {
            render_confirm(frame, "Delete this employee?", &theme);
        }
        Some(Overlay::ConfirmBulkDelete(count)) => {
            let text = format!("Delete {count} selected employee(s)?");
            render_confirm(frame, &text, &theme);
        }
        Some(Overlay::Message { text, error }) => render_message(frame, text, *error, &theme),
        None => {}
    }
}

fn render_login(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = centered_rect(frame.area(), 50, 14);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" Welcome Back ")
        .title_style(theme.title);
    frame.render_widget(block, area);

    let inner = Layout::default()
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Error
            Constraint::Length(1), // Footer
        ])
        .split(inner_rect(area, 2));

    let subtitle = Paragraph::new("Please login to your account")
        .style(theme.muted)
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, inner[0]);

    render_input_box(
        frame,
        inner[2],
        "Email",
        app.email_input.value(),
        app.login_focus == LoginField::Email,
        theme,
    );
    let masked = "*".repeat(app.password_input.value().chars().count());
    render_input_box(
        frame,
        inner[3],
        "Password",
        &masked,
        app.login_focus == LoginField::Password,
        theme,
    );

    if let Some(error) = &app.login_error {
        let p = Paragraph::new(error.as_str())
            .style(theme.error)
            .alignment(Alignment::Center);
        frame.render_widget(p, inner[4]);
    }

    let footer = key_hints(
        &[("Tab", "Switch"), ("Enter", "Login"), ("Esc", "Quit")],
        theme,
    );
    frame.render_widget(footer, inner[5]);
}

fn render_dashboard(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" Dashboard Summary ")
        .title_style(theme.title);
    frame.render_widget(block, area);

    let inner = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Length(7), // Cards
            Constraint::Min(1),
            Constraint::Length(1), // Footer
        ])
        .split(inner_rect(area, 2));

    let cards = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
    ])
    .split(inner[1]);

    let (total, active, inactive) = match &app.summary {
        Some(s) => (s.total.to_string(), s.active.to_string(), s.inactive.to_string()),
        None => ("-".to_string(), "-".to_string(), "-".to_string()),
    };
    render_card(frame, cards[0], "Total Employees", &total, theme.title, theme);
    render_card(frame, cards[1], "Active Employees", &active, theme.success, theme);
    render_card(frame, cards[2], "Inactive Employees", &inactive, theme.danger, theme);

    let footer = key_hints(
        &[
            ("e", "Employees"),
            ("r", "Refresh"),
            ("l", "Logout"),
            ("q", "Quit"),
        ],
        theme,
    );
    frame.render_widget(footer, inner[3]);
}

fn render_employees(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    let visible = app.roster.visible();

    let title = format!(
        " Employees ({} of {}) ",
        visible.len(),
        app.roster.employees().len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(title)
        .title_style(theme.title);
    frame.render_widget(block, area);

    let inner = Layout::default()
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Footer
        ])
        .split(inner_rect(area, 1));

    render_filters(frame, inner[0], app, theme);

    if app.loading {
        let p = Paragraph::new("Loading employees...")
            .style(theme.muted)
            .alignment(Alignment::Center);
        frame.render_widget(p, inner[1]);
    } else if visible.is_empty() {
        let hint = if app.roster.filter().is_unset() {
            "Get started by adding your first employee (c)"
        } else {
            "No employees found. Try adjusting your filters (x resets)"
        };
        let p = Paragraph::new(hint)
            .style(theme.muted)
            .alignment(Alignment::Center);
        frame.render_widget(p, inner[1]);
    } else {
        let header = Row::new(vec![
            "", "ID", "FULL NAME", "GENDER", "DATE OF BIRTH", "STATE", "IMG", "STATUS",
        ])
        .style(theme.muted);

        let rows: Vec<Row> = visible
            .iter()
            .enumerate()
            .map(|(i, emp)| {
                let mark = if app.roster.is_selected(emp.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let status = if emp.active { "Active" } else { "Inactive" };
                let status_cell = Cell::from(status).style(if emp.active {
                    theme.success
                } else {
                    theme.danger
                });
                let row = Row::new(vec![
                    Cell::from(mark),
                    Cell::from(emp.id.to_string()),
                    Cell::from(emp.name.clone()),
                    Cell::from(emp.gender.label()),
                    Cell::from(emp.dob.format("%b %-d, %Y").to_string()),
                    Cell::from(emp.state.clone()),
                    Cell::from(if emp.image.is_some() { "yes" } else { "-" }),
                    status_cell,
                ]);
                if i == app.cursor {
                    row.style(theme.selected)
                } else {
                    row.style(theme.normal)
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(16),
                Constraint::Min(16),
                Constraint::Length(8),
                Constraint::Length(13),
                Constraint::Length(18),
                Constraint::Length(4),
                Constraint::Length(8),
            ],
        )
        .header(header);
        frame.render_widget(table, inner[1]);
    }

    let footer = key_hints(
        &[
            ("/", "Search"),
            ("g/s", "Filter"),
            ("Space", "Select"),
            ("t", "Toggle"),
            ("c/e/d", "Add/Edit/Del"),
            ("D", "Bulk del"),
            ("p", "Print"),
            ("Esc", "Back"),
        ],
        theme,
    );
    frame.render_widget(footer, inner[2]);
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let cols = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(area);

    render_input_box(
        frame,
        cols[0],
        "Search Employee",
        app.search_input.value(),
        app.search_focused,
        theme,
    );

    let gender = match app.gender_filter {
        Some(g) => g.label(),
        None => "All Genders",
    };
    render_select_box(frame, cols[1], "Gender (g)", gender, theme);

    let status = match app.status_filter {
        Some(true) => "Active",
        Some(false) => "Inactive",
        None => "All Status",
    };
    render_select_box(frame, cols[2], "Status (s)", status, theme);
}

fn render_form(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(form) = &app.form else { return };

    let area = centered_rect(frame.area(), 62, 24);
    frame.render_widget(Clear, area);

    let title = if form.is_edit() {
        " Edit Employee "
    } else {
        " Add Employee "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(title)
        .title_style(theme.title);
    frame.render_widget(block, area);

    let inner = Layout::default()
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Dob
            Constraint::Length(3), // State
            Constraint::Length(3), // Image
            Constraint::Length(3), // Active
            Constraint::Min(1),    // Errors
            Constraint::Length(1), // Footer
        ])
        .split(inner_rect(area, 2));

    let focus = |field: FormField| app.form_focus == field;

    render_input_box(
        frame,
        inner[0],
        "Full Name *",
        &form.draft.name,
        focus(FormField::Name),
        theme,
    );

    let gender = form
        .draft
        .gender
        .map(|g| g.label())
        .unwrap_or("Select Gender");
    render_form_select(frame, inner[1], "Gender *", gender, focus(FormField::Gender), theme);

    render_input_box(
        frame,
        inner[2],
        "Date of Birth (YYYY-MM-DD) *",
        &form.draft.dob,
        focus(FormField::Dob),
        theme,
    );

    let state = form.draft.state.as_deref().unwrap_or("Select State");
    render_form_select(frame, inner[3], "State *", state, focus(FormField::State), theme);

    let image = match (&form.draft.image, app.image_input.value()) {
        (_, path) if !path.is_empty() => path.to_string(),
        (Some(_), _) => "attached (Enter on a path replaces, x removes)".to_string(),
        (None, _) => "type a file path, Enter to attach".to_string(),
    };
    render_input_box(
        frame,
        inner[4],
        "Profile Image",
        &image,
        focus(FormField::Image),
        theme,
    );

    let active = if form.draft.active { "Active" } else { "Inactive" };
    render_form_select(frame, inner[5], "Status", active, focus(FormField::Active), theme);

    let errors: Vec<Line> = form
        .errors
        .fields
        .iter()
        .map(|(field, message)| {
            Line::from(Span::styled(format!("{field}: {message}"), theme.error))
        })
        .collect();
    frame.render_widget(Paragraph::new(errors), inner[6]);

    let footer = key_hints(
        &[
            ("Tab", "Next field"),
            ("←/→", "Choose"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        theme,
    );
    frame.render_widget(footer, inner[7]);
}

fn render_confirm(frame: &mut Frame, text: &str, theme: &Theme) {
    let area = centered_rect(frame.area(), 46, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.danger)
        .title(" Confirm ")
        .title_style(theme.danger);
    frame.render_widget(block, area);

    let inner = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_rect(area, 2));

    let p = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(p, inner[0]);

    let footer = key_hints(&[("y", "Yes"), ("n", "No")], theme);
    frame.render_widget(footer, inner[2]);
}

fn render_message(frame: &mut Frame, text: &str, error: bool, theme: &Theme) {
    let area = centered_rect(frame.area(), 56, 7);
    frame.render_widget(Clear, area);

    let style = if error { theme.danger } else { theme.success };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(if error { " Error " } else { " Info " })
        .title_style(style);
    frame.render_widget(block, area);

    let inner = Layout::default()
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner_rect(area, 2));

    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(p, inner[0]);

    let footer = Paragraph::new("press any key")
        .style(theme.muted)
        .alignment(Alignment::Center);
    frame.render_widget(footer, inner[1]);
}

// ========== Widget helpers ==========

fn render_input_box(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let style = if focused { theme.field_focus } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {label} "));
    let text = if focused {
        format!("{value}\u{2588}")
    } else {
        value.to_string()
    };
    let p = Paragraph::new(text).block(block);
    frame.render_widget(p, area);
}

fn render_select_box(frame: &mut Frame, area: Rect, label: &str, value: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(format!(" {label} "));
    let p = Paragraph::new(value).block(block);
    frame.render_widget(p, area);
}

fn render_form_select(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let style = if focused { theme.field_focus } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {label} "));
    let p = Paragraph::new(format!("< {value} >")).block(block);
    frame.render_widget(p, area);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    value_style: ratatui::style::Style,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(format!(" {label} "));
    let p = Paragraph::new(Line::from(Span::styled(value, value_style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(p, area);
}

fn key_hints(hints: &[(&str, &str)], theme: &Theme) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key} "), theme.key_hint));
        spans.push(Span::styled(action.to_string(), theme.muted));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + 1,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(2),
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
