use super::Error;
use crate::compiler::frontend::error::Detail as FrontendErrorDetail;
use crate::compiler::frontend::error::Error as FrontendError;
use crate::compiler::source::{Registry, SourceId};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

pub struct ErrorReporter<'a> {
    source_registry: &'a Registry,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(source_registry: &'a Registry) -> Self {
        Self { source_registry }
    }
}

impl<'a> ErrorReporter<'a> {
    pub fn report_error(&self, e: &Error) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let mut lock = writer.lock();
        let config = codespan_reporting::term::Config::default();
        let diagnostic = self.diagnostic(e);

        if let Err(emit_error) = term::emit(&mut lock, &config, self.source_registry, &diagnostic) {
            log::error!("failed to render diagnostic: {}", emit_error);
            eprintln!("{}", e);
        }
    }

    pub fn diagnostic(&self, e: &Error) -> Diagnostic<SourceId> {
        match e {
            Error::IoError(e) => Diagnostic::error()
                .with_code("E000")
                .with_message(format!("{}", e)),
            Error::FrontendError(fe) => self.frontend_diagnostic(fe),
            Error::InternalConsistency(message, detail) => Diagnostic::error()
                .with_code("E020")
                .with_message("inconsistent split offsets")
                .with_labels(self.labels(message, detail, &[])),
        }
    }

    fn frontend_diagnostic(&self, e: &FrontendError) -> Diagnostic<SourceId> {
        use FrontendError::*;
        match e {
            UnknownSource(id) => Diagnostic::bug()
                .with_code("E001")
                .with_message(format!("source {:?} is not registered", id)),
            IncompleteInput(message, detail) => Diagnostic::error()
                .with_code("E010")
                .with_message("unexpected end of input")
                .with_labels(self.labels(message, detail, &[])),
            ParseError(message, detail, more_details) => Diagnostic::error()
                .with_code("E011")
                .with_message("failed to parse input")
                .with_labels(self.labels(message, detail, more_details)),
            Bug(message) => Diagnostic::bug().with_message(message),
        }
    }

    // synthetic locations have no text to point at
    fn labels(
        &self,
        message: &str,
        detail: &FrontendErrorDetail,
        more_details: &[FrontendErrorDetail],
    ) -> Vec<Label<SourceId>> {
        if detail.location.id.is_synthetic() {
            return vec![];
        }

        let mut labels = vec![
            Label::primary(detail.location.id, detail.location.span.clone()).with_message(message)
        ];
        labels.extend(
            more_details
                .iter()
                .filter(|d| !d.location.id.is_synthetic())
                .map(Self::to_label),
        );
        labels
    }

    fn to_label(detail: &FrontendErrorDetail) -> Label<SourceId> {
        Label::secondary(detail.location.id, detail.location.span.clone())
            .with_message(detail.content.clone())
    }
}
