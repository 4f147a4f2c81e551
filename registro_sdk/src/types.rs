use serde::{Deserialize, Serialize};

/// Reserved `nome` of the bootstrap record the node creates for itself.
/// Records carrying it are never displayed.
pub const GENESIS_NAME: &str = "Genesis Block";

/// One identity record as stored on the ledger.
///
/// The four civil fields are always present. Everything else is assigned by
/// the node and passed through untouched; the client never parses or checks
/// any of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub cpf: String,
    pub nome: String,
    pub naturalidade: String,
    pub data_nascimento: String,

    /// Position in the raw chain, assigned by the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,

    /// Creation time as reported by the node. Opaque to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl BlockRecord {
    /// Create a record with the four civil fields and no node metadata.
    pub fn new(
        cpf: impl Into<String>,
        nome: impl Into<String>,
        naturalidade: impl Into<String>,
        data_nascimento: impl Into<String>,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            nome: nome.into(),
            naturalidade: naturalidade.into(),
            data_nascimento: data_nascimento.into(),
            index: None,
            timestamp: None,
            previous_hash: None,
            hash: None,
        }
    }

    /// Whether this is the bootstrap record the client never displays.
    pub fn is_genesis(&self) -> bool {
        self.nome == GENESIS_NAME
    }
}

/// Payload for `POST /add_block`: exactly the four civil fields, submitted
/// even when empty. Validation, if any, is the node's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlock {
    pub cpf: String,
    pub nome: String,
    pub naturalidade: String,
    pub data_nascimento: String,
}

impl NewBlock {
    pub fn new(
        cpf: impl Into<String>,
        nome: impl Into<String>,
        naturalidade: impl Into<String>,
        data_nascimento: impl Into<String>,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            nome: nome.into(),
            naturalidade: naturalidade.into(),
            data_nascimento: data_nascimento.into(),
        }
    }
}

/// Acknowledgment returned by the node for a submitted record.
///
/// Only `nome` is guaranteed; the node normally echoes the full stored
/// block, but the extra fields are not relied on.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockAck {
    pub nome: String,

    #[serde(default)]
    pub cpf: Option<String>,

    #[serde(default)]
    pub index: Option<u64>,

    #[serde(default)]
    pub hash: Option<String>,
}

impl BlockAck {
    /// The node echoed its bootstrap record instead of the stored one.
    pub fn is_genesis(&self) -> bool {
        self.nome == GENESIS_NAME
    }
}

/// Mutable input source for the submission flow. Cleared only after the
/// node acknowledges the record, so a failed submission keeps the operator's
/// input intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockForm {
    pub cpf: String,
    pub nome: String,
    pub naturalidade: String,
    pub data_nascimento: String,
}

impl BlockForm {
    pub fn filled(
        cpf: impl Into<String>,
        nome: impl Into<String>,
        naturalidade: impl Into<String>,
        data_nascimento: impl Into<String>,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            nome: nome.into(),
            naturalidade: naturalidade.into(),
            data_nascimento: data_nascimento.into(),
        }
    }

    /// Snapshot the current input as a submission payload.
    pub fn record(&self) -> NewBlock {
        NewBlock {
            cpf: self.cpf.clone(),
            nome: self.nome.clone(),
            naturalidade: self.naturalidade.clone(),
            data_nascimento: self.data_nascimento.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.cpf.is_empty()
            && self.nome.is_empty()
            && self.naturalidade.is_empty()
            && self.data_nascimento.is_empty()
    }
}
