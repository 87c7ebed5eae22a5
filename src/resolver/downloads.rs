use crate::{
    catalog::CatalogReader, database::DatabaseError, types::models::download::DownloadRef,
};

use super::closure::resolve_closure;

/// Every file needed to install `version_id`: its own files plus those of the
/// whole dependency closure.
///
/// Unlike manifests this does not look at `dependencyType`; optional
/// dependencies are downloaded too.
pub async fn resolve_download_set<C: CatalogReader>(
    catalog: &mut C,
    version_id: i32,
) -> Result<Vec<DownloadRef>, DatabaseError> {
    let closure = resolve_closure(catalog, &[version_id]).await?;

    let mut version_ids: Vec<i32> = closure.all().iter().copied().collect();
    version_ids.sort_unstable();

    let files = catalog.get_files_for_versions(&version_ids).await?;
    log::debug!(
        "Download set for version {} spans {} version(s) over {} round(s), {} file(s)",
        version_id,
        version_ids.len(),
        closure.rounds(),
        files.len()
    );

    Ok(files.into_iter().map(DownloadRef::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::memory::MemoryCatalog, types::models::dependency::DependencyType};
    use pretty_assertions::assert_eq;

    fn urls(refs: &[DownloadRef]) -> Vec<&str> {
        let mut urls: Vec<&str> = refs.iter().map(|r| r.file_url.as_str()).collect();
        urls.sort_unstable();
        urls
    }

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::default()
            .with_version(1, "app", "1.0")
            .with_version(2, "lib", "1.0")
            .with_version(3, "skin", "1.0")
            .with_file(1, "app.pak", "mod")
            .with_file(1, "app-assets.zip", "assets")
            .with_file(2, "lib.pak", "mod")
            .with_file(3, "skin.pak", "mod")
            .with_dependency(1, "lib", DependencyType::Required)
            .with_dependency(1, "skin", DependencyType::Optional)
    }

    #[tokio::test]
    async fn includes_own_files_and_all_dependencies() {
        let mut catalog = catalog();
        let refs = resolve_download_set(&mut catalog, 1).await.unwrap();

        assert_eq!(
            urls(&refs),
            vec!["app-assets.zip", "app.pak", "lib.pak", "skin.pak"]
        );
        assert_eq!(catalog.file_lookups, 1);
    }

    #[tokio::test]
    async fn carries_file_type() {
        let mut catalog = catalog();
        let refs = resolve_download_set(&mut catalog, 1).await.unwrap();

        assert!(refs.contains(&DownloadRef {
            file_url: "app-assets.zip".into(),
            file_type: "assets".into(),
        }));
    }

    #[tokio::test]
    async fn cycle_yields_each_file_once() {
        let mut catalog = MemoryCatalog::default()
            .with_version(1, "a", "1.0")
            .with_version(2, "b", "1.0")
            .with_file(1, "a.pak", "mod")
            .with_file(2, "b.pak", "mod")
            .with_dependency(1, "b", DependencyType::Required)
            .with_dependency(2, "a", DependencyType::Required);

        let refs = resolve_download_set(&mut catalog, 2).await.unwrap();

        assert_eq!(urls(&refs), vec!["a.pak", "b.pak"]);
    }

    #[tokio::test]
    async fn unknown_version_has_nothing_to_download() {
        let mut catalog = catalog();
        let refs = resolve_download_set(&mut catalog, 42).await.unwrap();

        assert!(refs.is_empty());
    }

    #[tokio::test]
    async fn failure_returns_no_partial_list() {
        let mut catalog = catalog().failing_dependencies_after(0);

        assert!(resolve_download_set(&mut catalog, 1).await.is_err());
        assert_eq!(catalog.file_lookups, 0);
    }
}
