// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny HTML report assembly for the demo: one section per animation phase,
//! frames laid out left to right.

/// One report section: a phase of the demo with its captured frames.
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) caption: String,
    pub(crate) frames: Vec<String>,
}

/// Renders the full report document.
pub(crate) fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         .frames { display: flex; flex-wrap: wrap; gap: 8px; }\n\
         .frames svg { border: 1px solid #ddd; }\n\
         </style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{title}</h1>\n"));

    for section in sections {
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&format!("<p>{}</p>\n", section.caption));
        out.push_str("<div class=\"frames\">\n");
        for frame in &section.frames {
            out.push_str(frame);
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
