use std::fs::File;

use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use scrollview::{
    layout_pass, Actor, Edges, PaintContext, Policy, Rect, ScrollBarStyle, ScrollView,
    ScrollViewStyle, Viewport,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("scroll_view.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut view = ScrollView::new().with_style(
        ScrollViewStyle::new()
            .padding(Edges::all(2.0))
            .border(Edges::all(1.0))
            .vfade_offset(24.0),
    );
    view.vscroll_bar_mut().set_style(ScrollBarStyle::new(16.0));
    view.hscroll_bar_mut().set_style(ScrollBarStyle::new(16.0));
    view.add_child(Box::new(Viewport::new(480.0, 900.0).min_size(200.0, 400.0).reflow()))?;

    for (hpolicy, vpolicy) in [
        (Policy::Automatic, Policy::Automatic),
        (Policy::Never, Policy::Automatic),
        (Policy::Automatic, Policy::Always),
    ] {
        view.set_policy(hpolicy, vpolicy);
        for (width, height) in [(180.0, 300.0), (220.0, 500.0), (640.0, 1200.0)] {
            let rect = layout_pass(&mut view, Rect::from_size(width, height));
            let visibility = view.visibility();
            println!(
                "{hpolicy:?}/{vpolicy:?} in {width}x{height}: {}x{} hscroll={} vscroll={}",
                rect.width, rect.height, visibility.horizontal, visibility.vertical
            );
        }
    }

    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    };
    for _ in 0..3 {
        view.handle_mouse_event(&wheel);
    }
    println!("scrolled to y = {:.1}", view.vadjustment().value());

    let mut ctx = PaintContext::new();
    view.paint(&mut ctx);
    println!("painted: {:?}", ctx.painted_actors());

    Ok(())
}
