//! Registry of window content kinds and the open requests they produce.

use platform_host::{DocumentKind, GeneratedDocument};

use crate::model::{AppKind, DocumentBlob, DocumentRef, OpenWindowRequest, WindowContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_kind: AppKind,
    /// Window id used when the app is launched from the shell; one instance per id.
    pub window_id: &'static str,
    pub launcher_label: &'static str,
    pub show_in_dock: bool,
}

const APP_REGISTRY: [AppDescriptor; 6] = [
    AppDescriptor {
        app_kind: AppKind::WordDocument,
        window_id: "documents",
        launcher_label: "Documents",
        show_in_dock: true,
    },
    AppDescriptor {
        app_kind: AppKind::PdfViewer,
        window_id: "pdf-viewer",
        launcher_label: "PDF Viewer",
        show_in_dock: true,
    },
    AppDescriptor {
        app_kind: AppKind::PresentationViewer,
        window_id: "presentations",
        launcher_label: "Presentations",
        show_in_dock: true,
    },
    AppDescriptor {
        app_kind: AppKind::SpreadsheetEditor,
        window_id: "spreadsheets",
        launcher_label: "Spreadsheets",
        show_in_dock: true,
    },
    AppDescriptor {
        app_kind: AppKind::DocumentGenerator,
        window_id: "ai-generator",
        launcher_label: "AI Generator",
        show_in_dock: true,
    },
    AppDescriptor {
        app_kind: AppKind::Account,
        window_id: "account",
        launcher_label: "Account",
        show_in_dock: false,
    },
];

const WELCOME_TEXT: &str = "Welcome to your browser desktop.\n\n\
Open the AI Generator to draft a PDF, a slide deck, or a spreadsheet from a prompt.";

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn dock_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

pub fn app_descriptor(app_kind: AppKind) -> &'static AppDescriptor {
    app_registry()
        .iter()
        .find(|entry| entry.app_kind == app_kind)
        .expect("app descriptor exists")
}

/// Open request for launching `app_kind` from the shell.
pub fn open_request(app_kind: AppKind) -> OpenWindowRequest {
    let descriptor = app_descriptor(app_kind);
    let mut content = WindowContent::app(app_kind);
    if matches!(app_kind, AppKind::WordDocument) {
        content.document = Some(DocumentRef {
            file_id: "welcome".to_string(),
            file_name: "Welcome.docx".to_string(),
            blob: DocumentBlob::Text(WELCOME_TEXT.to_string()),
        });
    }
    OpenWindowRequest::new(descriptor.window_id, app_kind.title(), content)
}

fn file_extension(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Pdf => "pdf",
        DocumentKind::Ppt => "pptx",
        DocumentKind::Sheet => "xlsx",
    }
}

/// Open request for a freshly generated document. `ticket` keeps ids unique per generation.
pub fn open_document_request(document: GeneratedDocument, ticket: u64) -> OpenWindowRequest {
    let kind = document.content.kind();
    let window_id = format!("generated-{}-{ticket}", kind.token());
    let title = document.title.clone();
    OpenWindowRequest::new(
        window_id.clone(),
        title.clone(),
        WindowContent {
            kind: AppKind::for_document(kind),
            document: Some(DocumentRef {
                file_id: window_id,
                file_name: format!("{title}.{}", file_extension(kind)),
                blob: DocumentBlob::Generated(document),
            }),
        },
    )
}

#[cfg(test)]
mod tests {
    use platform_host::{DocumentSection, StructuredContent};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_kind_has_one_descriptor_with_unique_id() {
        let mut ids: Vec<&str> = app_registry().iter().map(|d| d.window_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), app_registry().len());
        assert_eq!(app_descriptor(AppKind::Account).window_id, "account");
        assert!(dock_apps().iter().all(|d| d.app_kind != AppKind::Account));
    }

    #[test]
    fn launch_request_uses_registry_id_and_title() {
        let req = open_request(AppKind::SpreadsheetEditor);
        assert_eq!(req.id.as_str(), "spreadsheets");
        assert_eq!(req.title, "Spreadsheets");
        assert_eq!(req.content, WindowContent::app(AppKind::SpreadsheetEditor));

        let docs = open_request(AppKind::WordDocument);
        assert_eq!(
            docs.content.document.map(|doc| doc.file_name),
            Some("Welcome.docx".to_string())
        );
    }

    #[test]
    fn generated_document_opens_matching_viewer() {
        let document = GeneratedDocument {
            title: "Quarterly plan".to_string(),
            content: StructuredContent::Pdf {
                sections: vec![DocumentSection {
                    heading: "Goals".to_string(),
                    body: "Ship".to_string(),
                }],
            },
        };

        let req = open_document_request(document.clone(), 7);

        assert_eq!(req.id.as_str(), "generated-pdf-7");
        assert_eq!(req.title, "Quarterly plan");
        assert_eq!(req.content.kind, AppKind::PdfViewer);
        let file = req.content.document.expect("document ref");
        assert_eq!(file.file_name, "Quarterly plan.pdf");
        assert_eq!(file.blob, DocumentBlob::Generated(document));
    }
}
