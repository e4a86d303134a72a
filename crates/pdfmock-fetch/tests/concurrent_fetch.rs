use std::sync::Arc;

use pdfmock_fetch::{
    CMapCompression, FetchError, Provider, ProviderConfig, ResourceDescriptor, ResourceProvider,
};
use tokio::task::JoinSet;

fn write_fixtures(dir: &std::path::Path, count: usize) {
    for i in 0..count {
        let body = vec![i as u8; i + 1];
        std::fs::write(dir.join(format!("f{i}.bin")), body).unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_file_fetches_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), 16);

    let provider: Arc<dyn ResourceProvider> = Arc::new(
        Provider::from_config(&ProviderConfig::File {
            root: Some(dir.path().to_path_buf()),
        })
        .unwrap(),
    );

    let mut set = JoinSet::new();
    for i in 0..16usize {
        let provider = Arc::clone(&provider);
        set.spawn(async move {
            let resource = provider
                .fetch(&ResourceDescriptor::new(format!("f{i}.bin")))
                .await
                .unwrap();
            (i, resource)
        });
    }

    while let Some(joined) = set.join_next().await {
        let (i, resource) = joined.unwrap();
        assert_eq!(resource.len(), i + 1);
        assert!(resource.data().iter().all(|b| *b == i as u8));
    }
}

#[tokio::test]
async fn one_failure_does_not_affect_siblings() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), 1);

    let provider = Provider::from_config(&ProviderConfig::File {
        root: Some(dir.path().to_path_buf()),
    })
    .unwrap();

    let ok = ResourceDescriptor::new("f0.bin");
    let missing = ResourceDescriptor::new("nope.bin");
    let (a, b) = tokio::join!(provider.fetch(&ok), provider.fetch(&missing));
    assert_eq!(a.unwrap().len(), 1);
    assert!(matches!(b.unwrap_err(), FetchError::Io { .. }));
}

#[tokio::test]
async fn cmap_compression_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("GB-EUC-H"), b"plain").unwrap();
    std::fs::write(dir.path().join("GB-EUC-H.bcmap"), b"packed").unwrap();
    let base = format!("{}/", dir.path().display());

    for (compressed, expected_kind, expected_body) in [
        (false, CMapCompression::None, &b"plain"[..]),
        (true, CMapCompression::Binary, &b"packed"[..]),
    ] {
        let provider = Provider::from_config(&ProviderConfig::CMap {
            base_url: Some(base.clone()),
            compressed,
        })
        .unwrap();
        let resource = provider
            .fetch(&ResourceDescriptor::cmap("GB-EUC-H"))
            .await
            .unwrap();
        let cmap = resource.as_cmap().unwrap();
        assert_eq!(cmap.compression, expected_kind);
        assert_eq!(cmap.data.as_ref(), expected_body);
    }
}
