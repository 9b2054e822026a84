use nestyle::{
    render, reset_level_detector, set_level_detector, ColorLevel, Painter, Stream, Style,
    StyleCodes, StyleNode,
};
use serial_test::serial;
use std::thread;

#[test]
fn test_nested_styles_resume_outer_color() {
    let painter = Painter::with_level(ColorLevel::Basic16);
    let green = painter.green();
    let inner = painter.blue().underline().bold().paint("with a blue substring");

    let out = green.paint(format!("I am a green line {} that becomes green again!", inner));

    // The outer open code follows the inner color close
    let blue_close = Style::Blue.codes().close;
    let green_open = Style::Green.codes().open;
    assert!(
        !out.contains(&format!("{}{}", blue_close, " that")),
        "outer color leaked: {:?}",
        out
    );
    assert!(out.contains(&format!("{} that becomes", green_open)));
    assert!(out.starts_with("\x1b[32mI am a green line \x1b[34m\x1b[4m\x1b[1m"));
    assert!(out.ends_with("green again!\x1b[39m"));
    assert_eq!(
        console::strip_ansi_codes(&out),
        "I am a green line with a blue substring that becomes green again!"
    );
}

#[test]
fn test_three_levels_of_nesting() {
    let p = Painter::with_level(ColorLevel::Basic16);
    let innermost = p.red().paint("r");
    let middle = p.blue().paint(format!("b{}b", innermost));
    let outer = p.green().paint(format!("g{}g", middle));

    assert_eq!(
        outer,
        "\x1b[32mg\x1b[34mb\x1b[31mr\x1b[34mb\x1b[32mg\x1b[39m"
    );
}

#[test]
fn test_bold_dim_chain_with_embedded_bold_close() {
    let p = Painter::with_level(ColorLevel::Basic16);
    let bold_dim = p.bold().dim();
    let embedded = p.bold().paint("inner");

    let out = bold_dim.paint(format!("x{}y", embedded));
    let close = Style::Bold.codes().close;
    let bold_open = Style::Bold.codes().open;

    // The bold ancestor keeps its close code ahead of the re-open
    assert!(out.contains(&format!("inner{}", close)));
    assert!(out.contains(&format!("{}{}", close, bold_open)));
}

#[test]
fn test_multiline_text_closes_per_line() {
    let p = Painter::with_level(ColorLevel::Ansi256).bg_blue().white();
    let node = p.node().unwrap().clone();

    let out = p.paint("line1\nline2");
    let expected_break = format!("{}\n{}", node.close_all(), node.open_all());
    assert!(out.contains(&expected_break));
    assert_eq!(
        out,
        format!(
            "{open}line1{close}\n{open}line2{close}",
            open = node.open_all(),
            close = node.close_all()
        )
    );
}

#[test]
fn test_level_none_emits_nothing() {
    let p = Painter::with_level(ColorLevel::None);
    assert_eq!(
        p.red().bold().paint_all(["a\nb", "\x1b[31mc\x1b[39m"]),
        "a\nb \x1b[31mc\x1b[39m"
    );
    assert_eq!(p.red().paint_all(Vec::<String>::new()), "");
}

#[test]
fn test_render_directly_with_nodes() {
    let bold = StyleNode::with_codes(None, &Style::Bold.codes());
    let custom = StyleNode::with_codes(
        Some(&bold),
        &StyleCodes::new("\x1b[38;2;222;173;237m", "\x1b[39m"),
    );

    let out = render(Some(&*custom), ColorLevel::TrueColor, ["Bold", "gray!"]);
    assert_eq!(
        out,
        "\x1b[1m\x1b[38;2;222;173;237mBold gray!\x1b[39m\x1b[22m"
    );
    assert_eq!(render(None, ColorLevel::TrueColor, ["a", "b"]), "a b");
}

#[test]
fn test_concurrent_renders_see_whole_levels() {
    let root = Painter::with_level(ColorLevel::Basic16);
    let styled = "\x1b[35mpurple\x1b[39m";

    thread::scope(|s| {
        for _ in 0..4 {
            let painter = root.magenta();
            s.spawn(move || {
                for _ in 0..500 {
                    let out = painter.paint("purple");
                    assert!(out == "purple" || out == styled, "torn output: {:?}", out);
                }
            });
        }

        let toggler = root.clone();
        s.spawn(move || {
            for i in 0..500 {
                let level = if i % 2 == 0 {
                    ColorLevel::None
                } else {
                    ColorLevel::TrueColor
                };
                toggler.set_level(level);
            }
        });
    });
}

#[test]
fn test_painter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Painter>();
    assert_send_sync::<StyleNode>();
}

#[test]
#[serial]
fn test_detector_sets_initial_level() {
    set_level_detector(|stream| match stream {
        Stream::Stdout => ColorLevel::Ansi256,
        Stream::Stderr => ColorLevel::None,
    });

    let stdout = Painter::new();
    let stderr = Painter::for_stream(Stream::Stderr);
    assert_eq!(stdout.level(), ColorLevel::Ansi256);
    assert_eq!(stderr.level(), ColorLevel::None);
    assert_eq!(stderr.red().paint("Ohs noes!"), "Ohs noes!");
    assert_eq!(stdout.red().paint("ok"), "\x1b[31mok\x1b[39m");

    // Existing painters keep their level when the detector changes
    set_level_detector(|_| ColorLevel::None);
    assert_eq!(stdout.level(), ColorLevel::Ansi256);
    assert_eq!(Painter::default().level(), ColorLevel::None);

    reset_level_detector();
}
