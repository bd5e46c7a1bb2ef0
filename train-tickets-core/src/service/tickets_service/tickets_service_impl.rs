use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    store::{AllocationStore, Passenger, Section},
};
use axum::async_trait;
use jwt_auth::{require_role, Role, User};
use std::{str::FromStr, sync::Arc};

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    store: Arc<dyn AllocationStore>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, store: Arc<dyn AllocationStore>) -> Self {
        Self { config, store }
    }

    fn validate_purchase(purchase: &input::TicketPurchase) -> Result<(), Error> {
        if purchase.first_name.is_empty()
            || purchase.last_name.is_empty()
            || purchase.email.is_empty()
        {
            return Err(Error::Validation(
                "first_name, last_name and email are required",
            ));
        }

        Ok(())
    }

    fn validate_seat_modification(modification: &input::SeatModification) -> Result<(), Error> {
        if modification.section.is_empty() || modification.seat_number == 0 {
            return Err(Error::Validation("section and seat_number are required"));
        }

        Ok(())
    }

    ///
    /// Non admin users may only name themselves as the target.
    /// Missing or empty email targets the caller.
    ///
    fn resolve_target<'a>(
        user: &'a User,
        email: Option<&'a str>,
        denied: &'static str,
    ) -> Result<&'a str, Error> {
        match email.filter(|email| !email.is_empty()) {
            None => Ok(user.email.as_str()),
            Some(email) if email == user.email || user.is_admin() => Ok(email),
            Some(_) => Err(Error::PermissionDenied(denied)),
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn purchase_ticket(
        &self,
        purchase: input::TicketPurchase,
    ) -> Result<output::Receipt, Error> {
        tracing::info!(email = %purchase.email, "purchasing ticket");

        Self::validate_purchase(&purchase)?;

        let passenger = Passenger {
            first_name: purchase.first_name,
            last_name: purchase.last_name,
            email: purchase.email,
        };
        let ticket = self
            .store
            .purchase(
                passenger,
                &self.config.route_from,
                &self.config.route_to,
                self.config.ticket_price,
            )
            .await?;
        tracing::info!(
            email = %ticket.passenger.email,
            section = %ticket.seat.section,
            seat_number = ticket.seat.seat_number,
            "purchased ticket"
        );

        Ok(output::Receipt::from(ticket))
    }

    async fn view_receipt(&self, user: &User) -> Result<output::Receipt, Error> {
        tracing::info!(email = %user.email, "finding receipt");

        let ticket = self.store.get_by_email(&user.email).await?;

        Ok(output::Receipt::from(ticket))
    }

    async fn view_allocations(
        &self,
        user: &User,
        filter: input::AllocationsFilter,
    ) -> Result<Vec<output::Allocation>, Error> {
        tracing::info!(email = %user.email, ?filter, "finding allocations");

        require_role(user, Role::Admin)?;

        let section = match filter.section.as_deref() {
            None | Some("") => None,
            Some(section) => match Section::from_str(section) {
                Ok(section) => Some(section),
                Err(_) => {
                    tracing::info!(section, "unknown section has no allocations");
                    return Ok(Vec::new());
                }
            },
        };

        let allocations = self
            .store
            .list_allocations(section)
            .await
            .into_iter()
            .map(output::Allocation::from)
            .collect::<Vec<_>>();
        tracing::info!(count = allocations.len(), "found allocations");

        Ok(allocations)
    }

    async fn remove_user(
        &self,
        user: &User,
        removal: input::UserRemoval,
    ) -> Result<output::Removal, Error> {
        let target = Self::resolve_target(
            user,
            removal.email.as_deref(),
            "only admin can remove other users",
        )?;
        tracing::info!(email = %user.email, target, "removing user");

        self.store.remove(target).await?;
        tracing::info!(target, "removed user");

        Ok(output::Removal {
            success: true,
            message: "user removed from train successfully".to_string(),
        })
    }

    async fn modify_seat(
        &self,
        user: &User,
        modification: input::SeatModification,
    ) -> Result<output::Receipt, Error> {
        Self::validate_seat_modification(&modification)?;

        let target = Self::resolve_target(
            user,
            modification.email.as_deref(),
            "only admin can modify other users' seats",
        )?;
        tracing::info!(
            email = %user.email,
            target,
            section = %modification.section,
            seat_number = modification.seat_number,
            "modifying seat"
        );

        let ticket = self
            .store
            .reseat(target, &modification.section, modification.seat_number)
            .await?;
        tracing::info!(target, "modified seat");

        Ok(output::Receipt::from(ticket))
    }
}
