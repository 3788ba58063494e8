use crate::app::{App, Focus};
use crate::components::{render_popup_with_block, render_warning_popup};
use crate::input::TextInput;
use crate::keybindings::hints;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use tasklist_domain::{TaskFilter, TaskRow};

/// Draws the whole screen from the controller state. Nothing is diffed:
/// the list widget is rebuilt from `app.rows` every frame.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_inputs(app, frame, chunks[0]);
    render_toolbar(app, frame, chunks[1]);
    render_task_list(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    if let Some(banner) = &app.banner {
        banner.render(frame, chunks[2]);
    }

    if app.show_help {
        render_help_popup(frame);
    }

    if let Some(message) = &app.warning {
        render_warning_popup(frame, message);
    }
}

fn render_inputs(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(area);

    render_text_field(
        frame,
        chunks[0],
        " New task ",
        &app.description,
        app.focus == Focus::Description,
    );
    render_text_field(
        frame,
        chunks[1],
        " Due (YYYY-MM-DD) ",
        &app.due_date,
        app.focus == Focus::DueDate,
    );
}

fn render_text_field(frame: &mut Frame, area: Rect, title: &str, input: &TextInput, focused: bool) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border(focused));
    let inner = block.inner(area);

    // Keep the cursor visible when the text is wider than the box
    let width = inner.width.max(1) as usize;
    let scroll = input.cursor().saturating_sub(width - 1);
    let visible: String = input.value().chars().skip(scroll).take(width).collect();

    frame.render_widget(Paragraph::new(visible).style(normal_text()).block(block), area);

    if focused {
        let x = inner.x + (input.cursor() - scroll) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_toolbar(app: &App, frame: &mut Frame, area: Rect) {
    let selected = TaskFilter::ALL_OPTIONS
        .iter()
        .position(|f| *f == app.view.filter)
        .unwrap_or(0);

    let titles: Vec<Line> = TaskFilter::ALL_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::from(format!("{} {}", i + 1, capitalize(filter.label()))))
        .collect();

    let title = format!(
        " Filter │ sort by due date {} {} ",
        app.view.sort,
        app.view.sort.arrow()
    );

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(label_text())
        .highlight_style(active_item())
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn render_task_list(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::List;
    let title = format!(" Tasks ({}) ", app.rows.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border(focused));

    if app.rows.is_empty() {
        let empty = Paragraph::new(Line::styled("No tasks", label_text())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app.rows.iter().map(task_row_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(selected_item(focused))
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(app.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

fn task_row_item(row: &TaskRow) -> ListItem<'static> {
    let (checkbox, text_style) = if row.completed {
        ("[x] ", done_text())
    } else {
        ("[ ] ", normal_text())
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, highlight_text()),
        Span::styled(row.text.clone(), text_style),
        Span::styled(row.due_label.clone(), due_text()),
        Span::styled("  [d]elete", label_text()),
    ]))
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints(app.focus).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", label_text()));
        }
        spans.push(Span::styled(*key, highlight_text()));
        spans.push(Span::styled(format!(" {}", label), label_text()));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_help_popup(frame: &mut Frame) {
    let inner = render_popup_with_block(frame, " Help ", 60, 60);

    let lines: Vec<Line> = [
        ("Tab / Shift-Tab", "move between fields and list"),
        ("Enter", "add task from the input fields"),
        ("Ctrl-A", "add task from anywhere"),
        ("j/k, ↓/↑", "move selection"),
        ("space, x", "toggle completed"),
        ("d, Del", "delete task"),
        ("1 / 2 / 3", "show all / active / completed"),
        ("f", "cycle filter"),
        ("s", "toggle due date sort direction"),
        ("q, Ctrl-C", "quit"),
    ]
    .iter()
    .map(|(key, what)| {
        Line::from(vec![
            Span::styled(format!("{:<18}", key), highlight_text()),
            Span::styled(*what, normal_text()),
        ])
    })
    .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
