use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use wordbook::config::ObjectStoreConfig;

/// Credentials come from the default provider chain. A custom endpoint
/// switches to path-style addressing, which MinIO and most S3 clones expect.
pub async fn client(target: &ObjectStoreConfig, endpoint_url: Option<&str>) -> Client {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(target.region.clone()));
    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let shared = loader.load().await;

    let conf = aws_sdk_s3::config::Builder::from(&shared)
        .force_path_style(endpoint_url.is_some())
        .build();
    Client::from_conf(conf)
}
