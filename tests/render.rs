use bmi_tui::config::UiConfig;
use bmi_tui::locale::Locale;
use bmi_tui::ui::app::App;
use bmi_tui::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen(app: &App) -> String {
    screen_sized(app, 80, 40)
}

fn screen_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn app_with(locale: Locale, height: &str, weight: &str) -> App {
    let mut app = App::new(&UiConfig {
        locale,
        animate_marker: false,
        ..UiConfig::default()
    });
    for ch in height.chars() {
        app.type_char(ch);
    }
    app.focus_next();
    for ch in weight.chars() {
        app.type_char(ch);
    }
    app
}

#[test]
fn empty_form_shows_labels_and_placeholders() {
    let app = App::new(&UiConfig::default());
    let text = screen(&app);
    assert!(text.contains("Frontend Mania"));
    assert!(text.contains("Калькулятор индекса массы тела"));
    assert!(text.contains("Калькулятор BMI"));
    assert!(text.contains("Введите ваши данные"));
    assert!(text.contains("Рост (см)"));
    assert!(text.contains("Вес (кг)"));
    assert!(text.contains("Например: 170"));
    assert!(text.contains("Рассчитать"));
    assert!(text.contains("Сбросить"));
    assert!(!text.contains("Ваш BMI"));
}

#[test]
fn computed_form_shows_result_and_scale() {
    let mut app = app_with(Locale::Ru, "170", "70");
    app.calculate();
    let text = screen(&app);
    assert!(text.contains("Ваш BMI: 24.2"));
    assert!(text.contains("Нормальный вес"));
    assert!(text.contains("▼"));
    assert!(text.contains("40"));
}

#[test]
fn error_form_shows_message_without_result() {
    let mut app = app_with(Locale::En, "170", "301");
    app.calculate();
    let text = screen(&app);
    assert!(text.contains("Weight must be between 30 and 300 kg"));
    assert!(!text.contains("Your BMI"));
}

#[test]
fn whole_bmi_renders_without_decimal() {
    let mut app = app_with(Locale::En, "150", "45");
    app.calculate();
    let text = screen(&app);
    assert!(text.contains("Your BMI: 20"));
    assert!(!text.contains("Your BMI: 20.0"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app_with(Locale::Ru, "160", "90");
    app.calculate();
    let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
}

#[test]
fn standard_terminal_shows_complete_result() {
    let mut app = app_with(Locale::Ru, "170", "70");
    app.calculate();
    let text = screen_sized(&app, 80, 24);
    assert!(text.contains("Ваш BMI: 24.2"), "value missing:\n{text}");
    assert!(text.contains("Нормальный вес"), "label missing:\n{text}");
    assert!(text.contains("Отличный результат"), "tip missing:\n{text}");
    assert!(text.contains("▼"), "marker missing:\n{text}");
    assert!(text.contains("█"), "track missing:\n{text}");
}

#[test]
fn standard_terminal_keeps_every_category_label() {
    let cases = [
        ("180", "50", "Underweight"),
        ("150", "45", "Normal weight"),
        ("170", "80", "Overweight"),
        ("160", "90", "Obesity"),
    ];
    for (height, weight, label) in cases {
        let mut app = app_with(Locale::En, height, weight);
        app.calculate();
        let text = screen_sized(&app, 80, 24);
        assert!(text.contains(label), "{label} missing:\n{text}");
        assert!(text.contains("▼"), "marker missing for {label}:\n{text}");
    }
}

#[test]
fn standard_terminal_shows_error_and_inputs() {
    let mut app = app_with(Locale::Ru, "99", "70");
    app.calculate();
    let text = screen_sized(&app, 80, 24);
    assert!(text.contains("Рост должен быть от 100 до 250 см"));
    assert!(text.contains("99"));
    assert!(text.contains("Рассчитать"));
}
