// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Column List Layout
//!
//! Reordering edits the original text rather than re-serializing the tree.
//! Each item of `models[0].columns` is a run of whole lines:
//!
//! ```text
//!   columns:
//!   # business key            ┐
//!   - name: id                │ item 0 (leading comments included)
//!     description: "Primary"  ┘
//!                             ← gap (blank lines stay in place)
//!   - name: email             ┐ item 1
//!     description: 'Email'    ┘
//!   tests: [...]              ← first line after the list
//! ```
//!
//! The runs are written back in the new order; every byte outside them is
//! kept, so comments, quoting, anchors and key order survive.
//!
//! Item start positions come from `yaml-rust2` parser event markers. Only
//! block sequences with one `-` per line at a common indent are handled;
//! anything else (flow lists, items opening on the line after the dash)
//! yields no layout and the caller falls back to serialization.

use std::ops::Range;

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;

const MODELS_KEY: &str = "models";
const COLUMNS_KEY: &str = "columns";

/// Collects every parser event with its source marker
#[derive(Default)]
struct EventLog {
    events: Vec<(Event, Marker)>,
}

impl MarkedEventReceiver for EventLog {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        self.events.push((ev, mark));
    }
}

/// Byte ranges of the first model's column items in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnLayout {
    items: Vec<Range<usize>>,
}

impl ColumnLayout {
    /// Locate the column items of `text`, or `None` if the list is not in
    /// line-based block form
    pub(crate) fn locate(text: &str) -> Option<Self> {
        let mut log = EventLog::default();
        let mut parser = Parser::new_from_str(text);
        parser.load(&mut log, false).ok()?;
        let events = log.events;

        let root = events
            .iter()
            .position(|(event, _)| matches!(event, Event::MappingStart(..)))?;
        let models = mapping_value(&events, root, MODELS_KEY)?;
        let first_model = *sequence_items(&events, models)?.first()?;
        let columns = mapping_value(&events, first_model, COLUMNS_KEY)?;
        let items = sequence_items(&events, columns)?;
        if items.is_empty() {
            return None;
        }

        // Markers count characters, slicing needs bytes
        let char_starts: Vec<usize> = text.char_indices().map(|(at, _)| at).collect();
        let offsets: Vec<usize> = items
            .iter()
            .map(|&at| {
                let index = events[at].1.index();
                char_starts.get(index).copied().unwrap_or(text.len())
            })
            .collect();

        Lines::new(text).item_ranges(&offsets).map(|items| Self { items })
    }

    /// Number of items found
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Rebuild `text` with the items arranged as `order` (indices into the
    /// original item list; repeats allowed, must not be empty)
    pub(crate) fn splice(&self, text: &str, order: &[usize]) -> String {
        let (Some(first), Some(last)) = (self.items.first(), self.items.last()) else {
            return text.to_string();
        };
        let region = first.start..last.end;

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..region.start]);

        for (position, &index) in order.iter().enumerate() {
            if position > 0 {
                // The gap before the n-th slot stays where it was
                if let Some(gap) = self.gap_before(position) {
                    out.push_str(&text[gap]);
                }
            }
            let item = &text[self.items[index].clone()];
            out.push_str(item);
            if !item.ends_with('\n') {
                out.push('\n');
            }
        }

        if !text[..region.end].ends_with('\n') {
            out.pop();
        }
        out.push_str(&text[region.end..]);
        out
    }

    fn gap_before(&self, position: usize) -> Option<Range<usize>> {
        let previous = self.items.get(position - 1)?;
        let next = self.items.get(position)?;
        Some(previous.end..next.start)
    }
}

/// Index just past the node that starts at `at`
fn skip_node(events: &[(Event, Marker)], at: usize) -> usize {
    let mut depth = 0usize;
    let mut index = at;
    loop {
        match events.get(index).map(|(event, _)| event) {
            Some(Event::MappingStart(..) | Event::SequenceStart(..)) => depth += 1,
            Some(Event::MappingEnd | Event::SequenceEnd) => depth = depth.saturating_sub(1),
            Some(_) => {}
            None => return index,
        }
        index += 1;
        if depth == 0 {
            return index;
        }
    }
}

/// Event index of the value under the scalar key `key` of the mapping at `at`
fn mapping_value(events: &[(Event, Marker)], at: usize, key: &str) -> Option<usize> {
    if !matches!(events.get(at)?.0, Event::MappingStart(..)) {
        return None;
    }

    let mut index = at + 1;
    loop {
        match &events.get(index)?.0 {
            Event::MappingEnd => return None,
            Event::Scalar(name, ..) if name == key => return Some(index + 1),
            _ => {}
        }
        let value = skip_node(events, index);
        index = skip_node(events, value);
    }
}

/// Event indices of the items of the sequence at `at`
fn sequence_items(events: &[(Event, Marker)], at: usize) -> Option<Vec<usize>> {
    if !matches!(events.get(at)?.0, Event::SequenceStart(..)) {
        return None;
    }

    let mut items = Vec::new();
    let mut index = at + 1;
    loop {
        if matches!(events.get(index)?.0, Event::SequenceEnd) {
            return Some(items);
        }
        items.push(index);
        index = skip_node(events, index);
    }
}

/// Line table of the source text
struct Lines<'a> {
    text: &'a str,
    spans: Vec<Range<usize>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        for (at, _) in text.match_indices('\n') {
            spans.push(start..at + 1);
            start = at + 1;
        }
        if start < text.len() {
            spans.push(start..text.len());
        }
        Self { text, spans }
    }

    fn content(&self, line: usize) -> &'a str {
        let text: &'a str = self.text;
        text[self.spans[line].clone()].trim_end_matches(['\n', '\r'])
    }

    fn indent(&self, line: usize) -> usize {
        let content = self.content(line);
        content.len() - content.trim_start_matches(' ').len()
    }

    fn is_blank(&self, line: usize) -> bool {
        self.content(line).trim().is_empty()
    }

    fn is_comment(&self, line: usize) -> bool {
        self.content(line).trim_start().starts_with('#')
    }

    fn line_of(&self, offset: usize) -> usize {
        self.spans
            .partition_point(|span| span.end <= offset)
            .min(self.spans.len().saturating_sub(1))
    }

    /// Turn item start offsets into whole-line item ranges
    fn item_ranges(&self, offsets: &[usize]) -> Option<Vec<Range<usize>>> {
        if self.spans.is_empty() {
            return None;
        }

        let dashes: Vec<usize> = offsets.iter().map(|&offset| self.line_of(offset)).collect();
        let indent = self.indent(*dashes.first()?);

        for (position, (&line, &offset)) in dashes.iter().zip(offsets).enumerate() {
            // Only `- ` may precede the item on its line
            let before_item = self.text.get(self.spans[line].start..offset)?;
            if before_item.trim() != "-" || self.indent(line) != indent {
                return None;
            }
            if position > 0 && line <= dashes[position - 1] {
                return None;
            }
        }

        let is_outdented_comment =
            |line: usize| self.is_comment(line) && self.indent(line) <= indent;

        // Leading comments at the list's indent belong to the item below them
        let starts: Vec<usize> = dashes
            .iter()
            .enumerate()
            .map(|(position, &dash)| {
                let floor = if position == 0 { 0 } else { dashes[position - 1] + 1 };
                let mut line = dash;
                while line > floor && is_outdented_comment(line - 1) {
                    line -= 1;
                }
                line
            })
            .collect();

        let last_dash = *dashes.last()?;
        let after_list = (last_dash + 1..self.spans.len())
            .find(|&line| {
                if self.is_blank(line) || self.is_comment(line) {
                    return false;
                }
                let line_indent = self.indent(line);
                line_indent < indent
                    || (line_indent == indent && !self.content(line).trim_start().starts_with('-'))
            })
            .unwrap_or(self.spans.len());

        let ranges = dashes
            .iter()
            .enumerate()
            .map(|(position, &dash)| {
                let mut end = match starts.get(position + 1) {
                    Some(&next) => next,
                    None => after_list,
                };
                let is_last = position + 1 == dashes.len();
                while end > dash + 1
                    && (self.is_blank(end - 1) || (is_last && is_outdented_comment(end - 1)))
                {
                    end -= 1;
                }
                self.spans[starts[position]].start..self.spans[end - 1].end
            })
            .collect();

        Some(ranges)
    }
}
