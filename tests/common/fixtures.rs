use serde_json::{json, Value};

/// A manifest exercising every part group.
pub fn report_manifest() -> Value {
    json!({
        "frontPage": {
            "title": "Quarterly Report",
            "subtitle": "Q3",
            "author": "Finance Team",
            "published": "2024-10-01"
        },
        "tableOfContents": { "includeHeadingsToLevel": 2 },
        "content": [
            {
                "kind": "chapter",
                "title": "Summary",
                "parts": [
                    { "kind": "html", "html": "<p>Revenue grew <b>12%</b>.</p><h2>Highlights</h2><h3>Detail</h3>" }
                ]
            },
            {
                "kind": "chapter",
                "title": "Figures",
                "parts": [
                    { "kind": "table", "columns": 3, "rows": [["Region", "Q2", "Q3"], ["North", 10, 12]] }
                ]
            }
        ],
        "appendices": [
            { "title": "Method", "parts": [ { "kind": "paragraph", "text": "Unaudited." } ] }
        ],
        "theme": { "headingFonts": ["Georgia"], "headingColor": "#336699" }
    })
}
