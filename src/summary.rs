//! The fixed text of the Overgangsdashboard app summary.
//!
//! All strings here describe a separate single-page web dashboard; they are
//! literal data, not derived from any input.  Keeping them in an explicit
//! value (rather than module globals) keeps [`SummaryText::compose`] a pure
//! function: same text in, same block sequence out.

use crate::content::ContentBlock;
use crate::style::StyleName;

/// The literal content of the summary report, one field per section.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryText {
    pub title: String,
    pub subtitle: String,
    pub what_it_is: String,
    pub personas: Vec<(String, String)>,
    pub features: Vec<String>,
    pub architecture: Vec<String>,
    pub run_steps: Vec<String>,
    pub quick_start: String,
    pub closing_note: String,
}

impl SummaryText {
    /// The canonical summary text for the Overgangsdashboard application.
    pub fn overgangsdashboard() -> Self {
        Self {
            title: "App Summary: Overgangsdashboard".to_string(),
            subtitle: "Evidence source: repo files only (`index.html`, sample data files)."
                .to_string(),
            what_it_is: "A single-page web dashboard for viewing student promotion outcomes \
                from an uploaded Excel file. It classifies each student into promoted, \
                discussed, or not promoted using built-in grade rules."
                .to_string(),
            personas: vec![
                (
                    "Primary persona".to_string(),
                    "School staff handling transition decisions (likely mentors/year \
                     coordinators), inferred from UI terms like `Klas`, `Mentor`, and \
                     `Leerjaar`."
                        .to_string(),
                ),
                (
                    "Explicit persona documentation".to_string(),
                    "Not found in repo.".to_string(),
                ),
            ],
            features: vec![
                "Uploads local Excel files (`.xlsx`) and parses the first worksheet \
                 in-browser using SheetJS."
                    .to_string(),
                "Builds student records from rows using `Leerlingnaam`/`Leerlingnummer`, \
                 `Studie`, `Klas`, and `Mentor` fields."
                    .to_string(),
                "Computes promotion status per student with year-specific rules (`G1` to \
                 `G5`) and shows green/orange/red outcomes."
                    .to_string(),
                "Supports filtering by year, class, mentor, and optional student-number \
                 search."
                    .to_string(),
                "Shows live counters for promoted, discussed, not promoted, and total \
                 displayed."
                    .to_string(),
                "Exports the currently filtered results as a semicolon-separated CSV \
                 download."
                    .to_string(),
            ],
            architecture: vec![
                "UI layer: one static page (`index.html`) with inline CSS and JavaScript; \
                 no build step found."
                    .to_string(),
                "External services: Google Fonts CDN and SheetJS CDN script \
                 (`xlsx.full.min.js`)."
                    .to_string(),
                "Data ingestion: user selects `.xlsx` file, browser `FileReader` loads it, \
                 SheetJS converts rows to JSON."
                    .to_string(),
                "Processing: JavaScript normalizes grades, groups/filter records, and runs \
                 status functions (`statusG1`, `statusG2orG3`, `statusG4`, `statusG5`)."
                    .to_string(),
                "Presentation/output: DOM table and counters update in real time; CSV \
                 export uses `Blob` and temporary object URL."
                    .to_string(),
                "Backend/API/database/authentication: Not found in repo.".to_string(),
            ],
            run_steps: vec![
                "Open `/Users/rudolfburggraaf/Documents/GitHub/Project Jan Wessels/index.html` \
                 in a modern browser."
                    .to_string(),
                "Click `Upload leerlingbestand (.xlsx)` and select a valid Excel file \
                 (example file exists: `kleine dataset.xlsx`)."
                    .to_string(),
                "Choose `leerjaar` first, then optional `klas` and/or `mentor`; optionally \
                 search by student number."
                    .to_string(),
                "Use `Download CSV` if you want the filtered results as a file.".to_string(),
                "Install/setup commands or production deployment instructions: Not found \
                 in repo."
                    .to_string(),
            ],
            quick_start: "MacBook quick start: open Finder, go to \
                `/Users/rudolfburggraaf/Documents/GitHub/Project Jan Wessels`, then open \
                `index.html` with Safari or Chrome (right-click -> Open With). If browser \
                security blocks local files, run `python3 -m http.server 8000` in that \
                folder and open `http://localhost:8000`."
                .to_string(),
            closing_note: "Note: this summary is constrained to code and files present in \
                the repo; missing documentation is marked explicitly."
                .to_string(),
        }
    }

    /// Composes the ordered block sequence of the report.
    ///
    /// Pure data assembly: title, subtitle, the five headed sections, and the
    /// closing note, in document order.
    pub fn compose(&self) -> Vec<ContentBlock> {
        vec![
            ContentBlock::paragraph(StyleName::Title, self.title.clone()),
            ContentBlock::paragraph(StyleName::Subtitle, self.subtitle.clone()),
            ContentBlock::heading("What it is"),
            ContentBlock::body(self.what_it_is.clone()),
            ContentBlock::heading("Who it is for"),
            ContentBlock::table(self.personas.iter().cloned()),
            ContentBlock::heading("What it does"),
            ContentBlock::bullets(self.features.iter().cloned()),
            ContentBlock::heading("How it works (repo-evidence architecture)"),
            ContentBlock::bullets(self.architecture.iter().cloned()),
            ContentBlock::heading("How to run (minimal)"),
            ContentBlock::bullets(self.run_steps.iter().cloned()),
            ContentBlock::body(self.quick_start.clone()),
            ContentBlock::paragraph(StyleName::SmallPrint, self.closing_note.clone()),
        ]
    }
}
