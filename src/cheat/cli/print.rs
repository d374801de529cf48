use cheat::api::{CmdMessage, MessageLevel};
use cheat::model::{Layer, SearchHit};
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_sheet_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

pub(super) fn print_search_hits(hits: &[SearchHit]) {
    for hit in hits {
        println!("{}", format_hit(hit));
    }
}

pub(super) fn print_layers(layers: &[Layer]) {
    for layer in layers {
        println!("{}", format_layer(layer));
    }
}

pub(super) fn print_raw(content: &str) {
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
}

fn format_hit(hit: &SearchHit) -> String {
    format!("{}:{}: {}", hit.sheet, hit.line_number, hit.line)
}

fn format_layer(layer: &Layer) -> String {
    format!(
        "{}: {} (readonly: {})",
        layer.name,
        layer.root.display(),
        layer.readonly
    )
}
