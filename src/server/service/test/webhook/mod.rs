use chrono::{Duration, Utc};

use crate::server::{
    data::{profile::ProfileRepository, subscription::SubscriptionRepository},
    error::AppError,
    model::billing::STATUS_CANCELED,
    service::webhook::{verify_signature, WebhookService},
};
use test_utils::{builder::TestBuilder, factory, fixture::stripe};

mod events;
mod signature;
