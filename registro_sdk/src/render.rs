use crate::view::ViewModel;
use std::fmt;

/// One labeled field of a rendered block, addressable by its stable id
/// (`cpf-0`, `nome-0`, ...) so tooling can find a specific field of a
/// specific displayed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub label: &'static str,
    pub value: String,
}

/// One rendered block unit: a heading plus the four civil fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockUnit {
    pub heading: String,
    pub fields: Vec<Field>,
}

/// The whole rendered output of one sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub units: Vec<BlockUnit>,
}

/// Materialize a view into a surface. Pure: equal views yield equal
/// surfaces, so rendering twice changes nothing observable.
pub fn render(view: &ViewModel) -> Surface {
    let units = view
        .blocks()
        .iter()
        .map(|block| {
            let i = block.index;
            let record = &block.record;
            BlockUnit {
                heading: format!("Block {}", i + 1),
                fields: vec![
                    Field {
                        id: format!("cpf-{}", i),
                        label: "CPF",
                        value: record.cpf.clone(),
                    },
                    Field {
                        id: format!("nome-{}", i),
                        label: "Nome",
                        value: record.nome.clone(),
                    },
                    Field {
                        id: format!("naturalidade-{}", i),
                        label: "Naturalidade",
                        value: record.naturalidade.clone(),
                    },
                    Field {
                        id: format!("data-nascimento-{}", i),
                        label: "Data de Nascimento",
                        value: record.data_nascimento.clone(),
                    },
                ],
            }
        })
        .collect();
    Surface { units }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, unit) in self.units.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", unit.heading)?;
            for field in &unit.fields {
                writeln!(f, "  {}: {}", field.label, field.value)?;
            }
        }
        Ok(())
    }
}

/// The one mutable rendering slot. Content only ever changes by full
/// replacement; a failed sync leaves the previous surface in place, so the
/// last good rendering survives any error.
#[derive(Debug, Default)]
pub struct Screen {
    current: Option<Surface>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly rendered surface, discarding the old one whole.
    pub fn replace(&mut self, surface: Surface) {
        self.current = Some(surface);
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.current.as_ref()
    }
}
