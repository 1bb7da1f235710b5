use crate::application::{App, AppMode, FilterField, FormField, Phase};
use crate::domain::PasswordStrength;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

const STATS: [(&str, &str); 4] = [
    ("10,000+", "Active Candidates"),
    ("500+", "Partner Companies"),
    ("1,000+", "Jobs Posted"),
    ("5,000+", "Successful Placements"),
];

const FEATURES: [&str; 3] = [
    "AI-Powered Matching",
    "Smart Resume Parsing",
    "Real-time Analytics",
];

pub fn render_ui(f: &mut Frame, app: &App) {
    if matches!(app.mode, AppMode::Register) {
        render_register_screen(f, app);
    } else {
        render_home_screen(f, app);
    }

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_home_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_hero(f, chunks[1]);
    render_filters(f, app, chunks[2]);
    render_featured_jobs(f, app, chunks[3]);
    render_testimonials(f, app, chunks[4]);
    render_status_bar(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let identity = match app.session.as_ref() {
        Some(user) => format!("Signed in as {}", user.name),
        None => "Not signed in".to_string(),
    };
    let header = Paragraph::new(format!("JobPilot - Find Your Perfect Job | {}", identity))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_hero(f: &mut Frame, area: Rect) {
    let stats = STATS
        .iter()
        .map(|(count, label)| format!("{} {}", count, label))
        .collect::<Vec<_>>()
        .join("  |  ");
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your Career Journey Starts Here",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Connect with top employers and find your dream job with our AI-powered matching technology"),
        Line::from(Span::styled(stats, Style::default().fg(Color::Blue))),
        Line::from(Span::styled(
            FEATURES.join("  ·  "),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(hero, area);
}

fn render_filters(f: &mut Frame, app: &App, area: Rect) {
    let editing = matches!(app.mode, AppMode::Filter);
    let fields = [
        FilterField::Search,
        FilterField::Location,
        FilterField::Profile,
        FilterField::Stipend,
    ];

    let mut spans = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let active = editing && app.active_filter == *field;
        let label_style = if active {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(format!("{}:", field.label()), label_style));
        let value = app.filter_value(*field);
        let shown = if value.is_empty() && !active {
            "-".to_string()
        } else if active {
            format!("{}_", value)
        } else {
            value.to_string()
        };
        spans.push(Span::raw(format!(" {}", shown)));
    }

    let title = if editing {
        "Search Jobs (Tab: next field, Enter: search, Esc: back)"
    } else {
        "Search Jobs"
    };
    let filters = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(filters, area);
}

fn render_featured_jobs(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Featured Opportunities");
    let state = app.jobs.state();

    match state.phase {
        Phase::Idle | Phase::Loading => {
            let loader = Paragraph::new("Finding the perfect opportunities...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(loader, area);
        }
        Phase::Error => {
            let message = state.error_message.as_deref().unwrap_or("Unknown error");
            let error = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(error, area);
        }
        Phase::Success if state.items.is_empty() => {
            let empty = Paragraph::new(
                "No jobs found - check back later for new opportunities or adjust your search criteria.",
            )
            .wrap(Wrap { trim: true })
            .block(block);
            f.render_widget(empty, area);
        }
        Phase::Success => {
            let items: Vec<ListItem> = state
                .items
                .iter()
                .enumerate()
                .map(|(i, job)| {
                    let selected = i == app.selected_job;
                    let title_style = if selected {
                        Style::default().bg(Color::Blue).fg(Color::White)
                    } else {
                        Style::default().add_modifier(Modifier::BOLD)
                    };
                    let mut lines = vec![
                        Line::from(Span::styled(
                            format!("{} at {}", job.title, job.company_name),
                            title_style,
                        )),
                        Line::from(Span::styled(
                            format!(
                                "  {} | {} | {} | {}",
                                job.location, job.job_type, job.experience_level, job.salary
                            ),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ];
                    if !job.skills.is_empty() {
                        lines.push(Line::from(Span::styled(
                            format!("  Skills: {}", job.skills.join(", ")),
                            Style::default().fg(Color::Green),
                        )));
                    }
                    ListItem::new(lines)
                })
                .collect();
            let list = List::new(items).block(block);
            f.render_widget(list, area);
        }
    }
}

fn render_testimonials(f: &mut Frame, app: &App, area: Rect) {
    let indicator = format!(
        "{}/{}{}",
        app.carousel.active_index() + 1,
        app.carousel.len(),
        if app.carousel.autoplay_enabled() {
            " | autoplay"
        } else {
            ""
        }
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("What Our Users Say ({})", indicator));

    let content = match app.carousel.active() {
        Some(testimonial) => {
            let stars: String = "*".repeat(testimonial.rating as usize);
            vec![
                Line::from(format!("\"{}\"", testimonial.quote)),
                Line::from(Span::styled(
                    format!(
                        "- {}, {} at {}  {}",
                        testimonial.author, testimonial.position, testimonial.company, stars
                    ),
                    Style::default().fg(Color::Yellow),
                )),
            ]
        }
        None => vec![Line::from("No testimonials available")],
    };

    let testimonial = Paragraph::new(content).wrap(Wrap { trim: true }).block(block);
    f.render_widget(testimonial, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Filter => format!(
            "Editing {}: {} (Tab: next field, Enter: search, Esc: back)",
            app.active_filter.label(),
            app.filter_value(app.active_filter)
        ),
        AppMode::ExportCsv => format!(
            "Export CSV as: {} (Enter to export, Esc to cancel)",
            app.filename_input
        ),
        _ => match app.status_message.as_ref() {
            Some(status) => status.clone(),
            None => "up/dn: jobs | left/right: testimonials | /: search | r: register | y: copy | Ctrl+E: export CSV | F1/?: help | q: quit"
                .to_string(),
        },
    };
    let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_register_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(14),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Join JobPilot",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Create your account and start your career journey"),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    render_register_form(f, app, chunks[1]);

    let footer_text = if app.registration_in_flight() {
        "Creating Account...".to_string()
    } else {
        "Tab: next field | Ctrl+P: show/hide password | Enter: create account | Esc: back".to_string()
    };
    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}

fn render_register_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Create Account");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name
            Constraint::Length(1), // email
            Constraint::Length(1), // password
            Constraint::Length(1), // strength meter
            Constraint::Length(1), // confirm password
            Constraint::Length(1), // messages
            Constraint::Min(0),
        ])
        .split(inner);

    render_form_field(f, app, FormField::Name, rows[0]);
    render_form_field(f, app, FormField::Email, rows[1]);
    render_form_field(f, app, FormField::Password, rows[2]);
    render_strength_meter(f, app, rows[3]);
    render_form_field(f, app, FormField::ConfirmPassword, rows[4]);

    // Local submit message first, then the collaborator's error.
    let message = app
        .form
        .submit_message()
        .map(str::to_string)
        .or_else(|| app.register_error.clone());
    if let Some(message) = message {
        let error = Paragraph::new(message).style(Style::default().fg(Color::Red));
        f.render_widget(error, rows[5]);
    }
}

fn render_form_field(f: &mut Frame, app: &App, field: FormField, area: Rect) {
    let active = app.active_field == field;
    let value = app.form.field(field);
    let masked = matches!(field, FormField::Password | FormField::ConfirmPassword)
        && !app.form.show_password();
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let marker = if value.is_empty() {
        Span::raw(" ")
    } else if app.form.field_valid(field) {
        Span::styled("ok", Style::default().fg(Color::Green))
    } else {
        Span::styled("!!", Style::default().fg(Color::Red))
    };

    let label_style = if active {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(format!("{:>17}: ", field.label()), label_style),
        Span::raw(if active { format!("{}_", shown) } else { shown }),
        Span::raw(" "),
        marker,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_strength_meter(f: &mut Frame, app: &App, area: Rect) {
    let strength = app.form.password_strength();
    if strength == PasswordStrength::None {
        return;
    }

    let color = match strength {
        PasswordStrength::Weak => Color::Red,
        PasswordStrength::Medium => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(strength.percent())
        .label(format!("Strength: {}", strength.label()));

    // Indent under the password field.
    let meter_area = Rect {
        x: area.x + 19,
        y: area.y,
        width: area.width.saturating_sub(19).min(30),
        height: area.height,
    };
    if meter_area.width > 0 {
        f.render_widget(gauge, meter_area);
    }
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("JobPilot Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"JOBPILOT TERMINAL CLIENT

=== HOME SCREEN ===
Up/Down or k/j   Select a job card
Left/Right, h/l  Previous/next testimonial (pauses autoplay)
1-9              Jump to a testimonial slide (pauses autoplay)
/ or f           Edit the search filters
r                Open the registration screen
y                Copy the selected job to the clipboard
Ctrl+E           Export the featured jobs to a CSV file
q                Quit application

=== SEARCH FILTERS ===
Tab/Shift+Tab    Move between Search, Location, Job Profile, Salary Range
Enter            Run the search (summary appears in the status bar)
Esc              Back to browsing, keeping the entered values

=== REGISTRATION ===
Tab/Shift+Tab    Move between the form fields
Ctrl+P           Show or hide the password fields
Enter            Create the account (all fields must be valid)
Esc              Back to the home screen

Field rules: name needs 2+ characters, email must look like
local@domain.tld, the password needs 6+ characters and both
password fields must match. The strength meter is informational
only: Weak below 6 characters, Medium at 6-7, Strong at 8+.

=== HELP NAVIGATION ===
Up/Down or j/k   Scroll help text up/down one line
Page Up/Down     Scroll help text up/down 5 lines
Home             Jump to top of help text
Esc/F1/?/q       Close this help window

The job list reloads every time the home screen is entered; if the
fetch fails, leave and re-enter the home screen to retry."#
        .to_string()
}
