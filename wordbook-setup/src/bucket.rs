use anyhow::Context;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use tracing::{info, warn};
use wordbook::config::ObjectStoreConfig;

/// Bucket policy letting anyone read objects, so stored image URLs resolve
/// without credentials.
pub fn public_read_policy(bucket: &str) -> String {
    serde_json::json!({
        "Version": "2012-10-17",
        "Statement": [
            {
                "Sid": "PublicReadGetObject",
                "Effect": "Allow",
                "Principal": "*",
                "Action": "s3:GetObject",
                "Resource": format!("arn:aws:s3:::{bucket}/*"),
            }
        ]
    })
    .to_string()
}

pub fn public_url(target: &ObjectStoreConfig, key: &str) -> String {
    format!(
        "https://{}.s3.{}.amazonaws.com/{}",
        target.bucket,
        target.region,
        key.trim_start_matches('/')
    )
}

pub async fn create_public_bucket(client: &Client, target: &ObjectStoreConfig) -> anyhow::Result<()> {
    let mut request = client.create_bucket().bucket(&target.bucket);
    // us-east-1 is the default location and rejects an explicit constraint.
    if target.region != "us-east-1" {
        request = request.create_bucket_configuration(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(target.region.as_str()))
                .build(),
        );
    }
    request
        .send()
        .await
        .with_context(|| format!("could not create bucket `{}`", target.bucket))?;
    info!("Created bucket {} in {}", target.bucket, target.region);

    // New AWS buckets block public policies. Some S3 clones do not implement
    // this call at all, so a failure only matters if the policy is refused.
    if let Err(err) = client
        .delete_public_access_block()
        .bucket(&target.bucket)
        .send()
        .await
    {
        warn!("could not remove public access block: {}", DisplayErrorContext(&err));
    }

    client
        .put_bucket_policy()
        .bucket(&target.bucket)
        .policy(public_read_policy(&target.bucket))
        .send()
        .await
        .with_context(|| format!("unable to update policy of bucket `{}`", target.bucket))?;

    info!("Successfully created bucket and set policy");
    Ok(())
}

/// Logs every object under `prefix` and returns how many there are.
pub async fn list_uploaded(client: &Client, bucket: &str, prefix: &str) -> anyhow::Result<usize> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .into_paginator()
        .send();

    let mut found = 0usize;
    while let Some(page) = pages.next().await {
        let page = page.with_context(|| format!("could not list objects in bucket `{bucket}`"))?;
        for object in page.contents() {
            found += 1;
            info!(
                "- {} (size: {} bytes)",
                object.key().unwrap_or_default(),
                object.size().unwrap_or_default()
            );
        }
    }

    info!("Found {found} objects in bucket {bucket} under `{prefix}`");
    Ok(found)
}
