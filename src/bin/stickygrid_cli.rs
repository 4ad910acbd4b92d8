//! CLI tool for stickygrid - composes one frame and outputs HTML or JSON
//!
//! Usage:
//!   stickygrid_cli <props.json> <rows> <cols>                 # HTML to stdout
//!   stickygrid_cli <props.json> 1-30 0-8 --json               # node tree as JSON
//!   stickygrid_cli <props.json> 1-30 0-8 -o frame.html        # write to file
//!
//! `<rows>`/`<cols>` are inclusive ranges (`4-20`) or a single index, and
//! describe the rectangle the virtualization engine has mounted.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::rc::Rc;

use stickygrid::render::{
    mount_rectangle, to_html, ColumnNameHeader, Compositor, HostProps, ValueCell,
};
use stickygrid::{GridProps, ItemData};

fn parse_range(arg: &str) -> Option<RangeInclusive<u32>> {
    match arg.split_once('-') {
        Some((a, b)) => {
            let (a, b) = (a.trim().parse().ok()?, b.trim().parse().ok()?);
            (a <= b).then_some(a..=b)
        }
        None => {
            let v = arg.trim().parse().ok()?;
            Some(v..=v)
        }
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        fail("Usage: stickygrid_cli <props.json> <rows> <cols> [--json] [--scroll-height N] [-o output]");
    }

    let props_path = &args[1];
    let rows = parse_range(&args[2]).unwrap_or_else(|| fail(&format!("Bad row range: {}", args[2])));
    let cols = parse_range(&args[3]).unwrap_or_else(|| fail(&format!("Bad column range: {}", args[3])));

    let mut as_json = false;
    let mut scroll_height = None;
    let mut output_path = None;
    let mut rest = args[4..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--json" => as_json = true,
            "--scroll-height" => {
                scroll_height = rest.next().and_then(|v| v.parse::<f32>().ok());
                if scroll_height.is_none() {
                    fail("--scroll-height needs a number");
                }
            }
            "-o" => output_path = rest.next().cloned(),
            other => fail(&format!("Unknown argument: {other}")),
        }
    }

    // Read and validate props
    let props = match GridProps::from_path(props_path) {
        Ok(p) => p,
        Err(e) => fail(&format!("Error loading {props_path}: {e}")),
    };

    let mounted = match mount_rectangle(&props, rows, cols) {
        Ok(m) => m,
        Err(e) => fail(&format!("Error mounting cells: {e}")),
    };

    let compositor: Compositor<ItemData> = Compositor::new(
        Rc::new(ValueCell),
        Rc::new(ColumnNameHeader),
        props.column_width_table().into_shared(),
        props.row_height_table().into_shared(),
        props.number_of_stickied_columns,
    )
    .with_theme(props.theme.clone());
    let host = HostProps::with_scroll_height(scroll_height.unwrap_or_else(|| props.content_height()));

    let (grid, metrics) = match compositor.compose_with_metrics(&mounted, &host, &props.item_data) {
        Ok(r) => r,
        Err(e) => fail(&format!("Error composing grid: {e}")),
    };
    eprintln!(
        "window {}:{}..{}:{}  mounted={} pass-through={} headers={} sticky-column={} min-width={}px",
        grid.window.from.row,
        grid.window.from.column,
        grid.window.to.row,
        grid.window.to.column,
        metrics.mounted_cells,
        metrics.pass_through_cells,
        metrics.header_cells,
        metrics.sticky_column_cells,
        metrics.total_column_width,
    );

    let node = grid.into_node();
    let out = if as_json {
        match serde_json::to_string_pretty(&node) {
            Ok(j) => j,
            Err(e) => fail(&format!("Error serializing JSON: {e}")),
        }
    } else {
        to_html(&node)
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &out) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(out.as_bytes()).unwrap();
            println!();
        }
    }
}
