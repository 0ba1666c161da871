use sea_orm::{DbErr, EntityTrait, PaginatorTrait};

use crate::server::{
    data::payment::PaymentRepository,
    model::billing::{PaymentStatus, UpsertPaymentParams},
};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
