//! Tipos de dados para o documento bruto retornado pelo serviço de orquestração.
//!
//! [`RawWorkflow`] espelha o formato de transporte sem validá-lo: todo
//! campo usa `#[serde(default)]` para que ausências degradem em vez de
//! falhar, e os mapas aninhados (`WorkflowConfig`, `WorkflowContext`)
//! permanecem opacos como `serde_json::Map`, de modo que valores
//! aninhados malformados nunca derrubam o documento inteiro.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Documento bruto de um workflow, como retornado pelo serviço.
///
/// Nenhum campo é obrigatório. A interpretação dos campos acontece na
/// construção de [`Workflow`](super::Workflow), uma única vez.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWorkflow {
    /// Identificador do workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Configuração opaca do workflow. Chave reconhecida: `IsJobQueue`.
    #[serde(rename = "WorkflowConfig", default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,

    /// Contexto de execução opaco. Chaves reconhecidas: `STATE`,
    /// `StartTime` (nome do job → timestamp) e `JOB_STATES`
    /// (nome do job → estado).
    #[serde(rename = "WorkflowContext", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,

    /// Nomes dos jobs, na ordem de execução definida pelo serviço.
    #[serde(rename = "Jobs", default)]
    pub jobs: Vec<String>,

    /// Relações de dependência entre jobs, repassadas sem interpretação.
    #[serde(rename = "ParentJobs", default)]
    pub parent_jobs: Vec<Value>,
}
