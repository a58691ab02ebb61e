/*!
 * Extractors
 *
 * Public API:
 * - AuthenticatedRequest (FromRequest): 認証済み claims + raw body
 */
mod authenticated;
