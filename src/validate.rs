//! Local precondition checks run before anything touches the network.

use std::collections::HashSet;

use crate::{
    constants::*,
    data::{Creator, Locator, MetadataDocument},
    error::ValidationError,
};

pub fn validate_document(document: &MetadataDocument) -> Result<(), ValidationError> {
    validate_name(&document.name)?;
    validate_symbol(&document.symbol)?;
    validate_basis_points(document.seller_fee_basis_points)?;
    validate_creators(&document.creators)
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty("name"));
    }
    check_len("name", name, MAX_NAME_LENGTH)
}

pub fn validate_symbol(symbol: &str) -> Result<(), ValidationError> {
    check_len("symbol", symbol, MAX_SYMBOL_LENGTH)
}

pub fn validate_locator(locator: &Locator) -> Result<(), ValidationError> {
    if locator.as_str().is_empty() {
        return Err(ValidationError::Empty("locator"));
    }
    check_len("locator", locator.as_str(), MAX_URI_LENGTH)
}

pub fn validate_basis_points(basis_points: u16) -> Result<(), ValidationError> {
    if basis_points > MAX_BASIS_POINTS {
        return Err(ValidationError::BasisPointsOutOfRange(basis_points));
    }
    Ok(())
}

pub fn validate_creators(creators: &[Creator]) -> Result<(), ValidationError> {
    if creators.len() > MAX_CREATOR_LIMIT {
        return Err(ValidationError::TooManyCreators {
            count: creators.len(),
            max: MAX_CREATOR_LIMIT,
        });
    }

    let mut seen = HashSet::with_capacity(creators.len());
    for creator in creators {
        if !seen.insert(creator.address) {
            return Err(ValidationError::DuplicateCreator(creator.address));
        }
    }

    let total: u32 = creators.iter().map(|c| u32::from(c.share)).sum();
    if total != TOTAL_CREATOR_SHARES {
        return Err(ValidationError::CreatorShares(total));
    }

    Ok(())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        return Err(ValidationError::TooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(())
}
