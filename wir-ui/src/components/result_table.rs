//! Weather summary table built from the rendered display document.

use dioxus::prelude::*;
use wir_core::DisplayDocument;

#[derive(Props, Clone, PartialEq)]
pub struct ResultTableProps {
    pub document: DisplayDocument,
}

/// One titled section per category, one row per metric. The whole table is
/// rebuilt from the document, so nothing from an earlier search survives.
#[component]
pub fn ResultTable(props: ResultTableProps) -> Element {
    if props.document.is_empty() {
        return rsx! {
            p {
                style: "color: #666; font-size: 14px;",
                "No statistics available for this location and date."
            }
        };
    }

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; margin: 12px 0; font-size: 14px;",
            for group in props.document.groups.iter() {
                tbody {
                    key: "{group.key}",
                    tr {
                        th {
                            colspan: "2",
                            style: "text-align: left; padding: 8px 4px 4px 4px; border-bottom: 2px solid #2196F3;",
                            "{group.title}"
                        }
                    }
                    for row in group.rows.iter() {
                        tr {
                            key: "{group.key}-{row.label}",
                            td {
                                style: "padding: 4px; border-bottom: 1px solid #eee;",
                                "{row.label}"
                            }
                            td {
                                style: "padding: 4px; border-bottom: 1px solid #eee; text-align: right;",
                                "{row.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
