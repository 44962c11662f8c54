// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `fitsize`.
//!
//! Fits a caption into boxes of several sizes, once with the heuristic measurer
//! and once with Parley.

use fitsize::{
    AutoSizeAttributes, AutoSizeHelper, AutoSizeType, Dimension, DisplayMetrics,
    LayoutIntrospector, TextHost,
};
use fitsize_text::{HeuristicLayoutMeasurer, TextLayoutMeasurer, TextStyle};
use fitsize_text_parley::ParleyLayoutMeasurer;
use kurbo::{Insets, Size};

const CAPTION: &str = "Auto-sized text grows to fill its box and shrinks to stay inside it.";

struct Label {
    text: String,
    size: Size,
    text_size: f64,
    laid_out: bool,
    relayouts: usize,
}

impl LayoutIntrospector for Label {}

impl TextHost for Label {
    fn text(&self) -> &str {
        &self.text
    }

    fn text_style(&self) -> TextStyle {
        TextStyle::new(self.text_size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn padding(&self) -> Insets {
        Insets::uniform(4.0)
    }

    fn set_text_size(&mut self, size: f64) {
        self.text_size = size;
    }

    fn has_layout(&self) -> bool {
        self.laid_out
    }

    fn request_layout(&mut self) {
        self.relayouts += 1;
    }
}

fn run<M: TextLayoutMeasurer>(name: &str, measurer: M) {
    let metrics = DisplayMetrics::new(1.0);
    let attrs = AutoSizeAttributes::new(AutoSizeType::Uniform)
        .with_min_text_size(Dimension::sp(8.0))
        .with_max_text_size(Dimension::sp(96.0))
        .with_step_granularity(Dimension::px(2.0));

    let mut label = Label {
        text: CAPTION.to_owned(),
        size: Size::ZERO,
        text_size: 14.0,
        laid_out: false,
        relayouts: 0,
    };
    let mut helper = AutoSizeHelper::new(measurer);
    if let Err(err) = helper.load_from_attributes(&label, &attrs, &metrics) {
        println!("{name}: {err}");
        return;
    }
    println!("{name}: {} candidate sizes", helper.ladder().len());

    // Not laid out yet: nothing happens.
    println!("  unmeasured -> {:?}", helper.compute_and_apply(&mut label));

    label.laid_out = true;
    for (w, h) in [(120.0, 40.0), (320.0, 80.0), (640.0, 200.0), (1200.0, 600.0)] {
        label.size = Size::new(w, h);
        let chosen = helper.compute_and_apply(&mut label);
        println!(
            "  {w}x{h} -> {chosen:?} (applied {}px, {} relayouts)",
            label.text_size, label.relayouts
        );
    }
}

fn main() {
    run("heuristic", HeuristicLayoutMeasurer);
    run("parley", ParleyLayoutMeasurer::new());
}
