use lexdesk_core::{
    DatabaseUrl, Processo, ProcessoDraft, ProcessoFilter, ProcessoService, ProcessoStore,
    SqliteProcessoStore, StatusProcesso,
};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> SqliteProcessoStore {
    let path = dir.path().join("lexdesk.db");
    let url = DatabaseUrl::new(path.to_str().unwrap()).unwrap();
    let store = SqliteProcessoStore::new(url);
    store.ensure_schema().unwrap();
    store
}

fn sample_draft(cliente: &str, status: &str) -> ProcessoDraft {
    ProcessoDraft {
        numero_processo: 4021,
        data: "10/01/2024 - 22/04/2024".to_string(),
        acao: "Cível".to_string(),
        instancia: "2ª instância".to_string(),
        fase: "Recursal".to_string(),
        cliente: cliente.to_string(),
        empresa: "Empresa B".to_string(),
        advogado: "Dr. Lima".to_string(),
        status: status.to_string(),
    }
}

fn fields_match(record: &Processo, draft: &ProcessoDraft) -> bool {
    record.numero_processo == draft.numero_processo
        && record.data == draft.data
        && record.acao == draft.acao
        && record.instancia == draft.instancia
        && record.fase == draft.fase
        && record.cliente == draft.cliente
        && record.empresa == draft.empresa
        && record.advogado == draft.advogado
        && record.status == draft.status
}

#[test]
fn add_then_find_round_trips_every_field() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let draft = sample_draft("111.222.333-44", "Em andamento");
    store.add(&draft).unwrap();

    let found = store
        .find(&ProcessoFilter::by_cliente("111.222.333-44"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert!(fields_match(&found[0], &draft));
    assert!(found[0].id > 0);
}

#[test]
fn store_accepts_non_canonical_status_verbatim() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let draft = sample_draft("555.666.777-88", "Arquivado provisoriamente");
    store.add(&draft).unwrap();

    let found = store.find(&ProcessoFilter::all()).unwrap();
    assert_eq!(found[0].status, "Arquivado provisoriamente");
}

#[test]
fn update_status_changes_only_the_status_field() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store
        .add(&sample_draft("111.222.333-44", "Em andamento"))
        .unwrap();
    let before = store.find(&ProcessoFilter::all()).unwrap().remove(0);

    store.update_status(before.id, "Concluído").unwrap();

    let after = store.find(&ProcessoFilter::all()).unwrap().remove(0);
    assert_eq!(after.status, "Concluído");
    assert_eq!(
        Processo {
            status: before.status.clone(),
            ..after.clone()
        },
        before
    );
}

#[test]
fn update_and_delete_on_missing_id_are_silent_no_ops() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store
        .add(&sample_draft("111.222.333-44", "Em andamento"))
        .unwrap();
    let existing = store.find(&ProcessoFilter::all()).unwrap().remove(0);
    let missing_id = existing.id + 1000;

    store.update_status(missing_id, "Finalizado").unwrap();
    store.delete(missing_id).unwrap();

    let after = store.find(&ProcessoFilter::all()).unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0], existing);
}

#[test]
fn delete_removes_the_row_and_its_id_is_never_reused() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store
        .add(&sample_draft("111.222.333-44", "Em andamento"))
        .unwrap();
    let first = store.find(&ProcessoFilter::all()).unwrap().remove(0);

    store.delete(first.id).unwrap();
    assert!(store.find(&ProcessoFilter::all()).unwrap().is_empty());

    store
        .add(&sample_draft("999.888.777-66", "Concluído"))
        .unwrap();
    let second = store.find(&ProcessoFilter::all()).unwrap().remove(0);
    assert!(second.id > first.id);
}

#[test]
fn service_wraps_store_calls() {
    let dir = TempDir::new().unwrap();
    let service = ProcessoService::new(open_store(&dir));

    let draft = ProcessoDraft::with_status(
        7777,
        "05/05/2024",
        "Tributária",
        "1ª instância",
        "Inicial",
        "12.345.678/0001-90",
        "Empresa C",
        "Dra. Rocha",
        StatusProcesso::EmAndamento,
    );
    service.add(&draft).unwrap();

    let listed = service.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, "Em andamento");

    service
        .update_status_canonical(listed[0].id, StatusProcesso::Finalizado)
        .unwrap();
    assert_eq!(service.count_for("Finalizado").unwrap(), 1);
    assert_eq!(service.count_for("Em andamento").unwrap(), 0);

    service.delete(listed[0].id).unwrap();
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn processo_serializes_with_column_field_names() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store
        .add(&sample_draft("111.222.333-44", "Em andamento"))
        .unwrap();
    let record = store.find(&ProcessoFilter::all()).unwrap().remove(0);

    let json = serde_json::to_value(&record).unwrap();
    for key in [
        "id",
        "numero_processo",
        "data",
        "acao",
        "instancia",
        "fase",
        "cliente",
        "empresa",
        "advogado",
        "status",
    ] {
        assert!(json.get(key).is_some(), "missing serialized key `{key}`");
    }
}
