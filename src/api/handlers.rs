use actix_web::{web, HttpResponse, Responder};

use super::dto::{
    AccumulatorRequest, AccumulatorResponse, HealthResponse, OddsQuery, RoiQuery, StakeQuery,
};
use super::error::ApiError;
use crate::calc;
use crate::domain::parse_decimal;

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /bets/validate/odds?odds=`
pub async fn validate_odds(query: web::Query<OddsQuery>) -> Result<HttpResponse, ApiError> {
    let odds = parse_decimal("odds", query.odds.as_deref())?;
    Ok(HttpResponse::Ok().json(calc::validate_odds(odds)))
}

/// `GET /bets/calculate/potential-win?amount=&odds=`
pub async fn potential_win(query: web::Query<StakeQuery>) -> Result<HttpResponse, ApiError> {
    let amount = parse_decimal("amount", query.amount.as_deref())?;
    let odds = parse_decimal("odds", query.odds.as_deref())?;
    Ok(HttpResponse::Ok().json(calc::calculate_potential_win(amount, odds)?))
}

/// `GET /bets/calculate/profit?amount=&odds=`
pub async fn profit(query: web::Query<StakeQuery>) -> Result<HttpResponse, ApiError> {
    let amount = parse_decimal("amount", query.amount.as_deref())?;
    let odds = parse_decimal("odds", query.odds.as_deref())?;
    Ok(HttpResponse::Ok().json(calc::calculate_profit(amount, odds)?))
}

/// `GET /bets/calculate/implied-probability?odds=`
pub async fn implied_probability(
    query: web::Query<OddsQuery>,
) -> Result<HttpResponse, ApiError> {
    let odds = parse_decimal("odds", query.odds.as_deref())?;
    Ok(HttpResponse::Ok().json(calc::implied_probability(odds)?))
}

/// `POST /bets/calculate/accumulator-odds`
pub async fn accumulator_odds(
    req: web::Json<AccumulatorRequest>,
) -> Result<HttpResponse, ApiError> {
    let quote = calc::quote_accumulator(&req.bets, req.stake)?;

    Ok(HttpResponse::Ok().json(AccumulatorResponse {
        total_odds: quote.total_odds,
        potential_win: quote.potential_win,
    }))
}

/// `GET /bets/calculate/roi?totalStaked=&totalReturned=`
pub async fn roi(query: web::Query<RoiQuery>) -> Result<HttpResponse, ApiError> {
    let staked = parse_decimal("totalStaked", query.total_staked.as_deref())?;
    let returned = parse_decimal("totalReturned", query.total_returned.as_deref())?;
    Ok(HttpResponse::Ok().json(calc::calculate_roi(staked, returned)?))
}
