pub mod dynamic_import;
pub mod error;
pub mod frontend;
pub mod injector;
pub mod module_block;
pub mod options;
pub mod source;
pub mod specifier;
use error::reporting::ErrorReporter;
use frontend::syntax::{Group, Node, NodeKind, Template};
use source::{Origin, Registry, Source, SourceId, StringSource};

pub use error::Error;
pub use options::Options;

pub type Result<T> = std::result::Result<T, Error>;

/// Compiles programs containing module blocks into plain programs that use the runtime shim.
///
/// Every source the compiler reads or produces along the way is kept in its registry,
/// so errors can be reported against the text they refer to.
#[derive(Debug)]
pub struct Compiler {
    options: Options,
    registry: Registry,
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Compiler {
            options,
            registry: Registry::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn compile<T: Source>(&mut self, source: &mut T) -> Result<String> {
        let id = self.registry.add(source)?;
        log::debug!("compiling {}", source.origin());
        self.compile_registered(id)
    }

    pub fn compile_str(&mut self, text: &str) -> Result<String> {
        self.compile(&mut StringSource::new(text))
    }

    pub fn print_error(&self, e: &Error) {
        ErrorReporter::new(&self.registry).report_error(e)
    }

    fn compile_registered(&mut self, id: SourceId) -> Result<String> {
        let text = self
            .registry
            .text(id)
            .ok_or(frontend::error::Error::UnknownSource(id))?
            .to_string();

        let program = frontend::parse(&text, id)?;
        let body = self.transform(program.body)?;
        let body = injector::inject(body, &self.options);

        Ok(frontend::generate(&body))
    }

    fn transform(&mut self, nodes: Vec<Node>) -> Result<Vec<Node>> {
        let mut out = Vec::with_capacity(nodes.len());

        for node in nodes {
            let Node {
                kind,
                span,
                newline_before,
            } = node;

            match kind {
                NodeKind::ModuleBlock(body) => {
                    let mut artifact = self.compile_module_block(body)?;
                    if let Some(first) = artifact.first_mut() {
                        first.newline_before = newline_before;
                    }
                    out.extend(artifact);
                }
                NodeKind::ImportCall(arguments) => {
                    let arguments = self.transform_group(arguments)?;
                    let arguments = dynamic_import::rewrite(arguments, &self.options);
                    out.push(Node {
                        kind: NodeKind::ImportCall(arguments),
                        span,
                        newline_before,
                    });
                }
                NodeKind::Group(group) => out.push(Node {
                    kind: NodeKind::Group(self.transform_group(group)?),
                    span,
                    newline_before,
                }),
                NodeKind::Template(Template { quasis, exprs }) => {
                    let exprs = exprs
                        .into_iter()
                        .map(|expr| self.transform(expr))
                        .collect::<Result<Vec<_>>>()?;
                    out.push(Node {
                        kind: NodeKind::Template(Template { quasis, exprs }),
                        span,
                        newline_before,
                    });
                }
                kind => out.push(Node {
                    kind,
                    span,
                    newline_before,
                }),
            }
        }

        Ok(out)
    }

    fn transform_group(&mut self, group: Group) -> Result<Group> {
        let Group {
            delimiter,
            children,
            close_newline,
        } = group;

        Ok(Group {
            delimiter,
            children: self.transform(children)?,
            close_newline,
        })
    }

    /// Compiles the body on its own, reads the result back and splices it into an artifact.
    fn compile_module_block(&mut self, body: Group) -> Result<Vec<Node>> {
        let body_text = frontend::generate(&body.children);
        let body_id = self.registry.add_text(Origin::ModuleBlock, body_text);
        let compiled = self.compile_registered(body_id)?;

        let compiled_id = self.registry.add_text(Origin::ModuleBlock, compiled.as_str());
        let tree = frontend::parse(&compiled, compiled_id)?;
        let mut splits = module_block::scan(&tree.body);
        module_block::sort_descending(&mut splits);

        let plan = module_block::SplicePlan::build(&compiled, &splits, compiled_id)?;
        log::debug!(
            "module block {:?} compiled with {} substitutions",
            compiled_id,
            plan.substitutions.len()
        );

        Ok(module_block::build_artifact(&plan, &self.options.runtime_name))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
